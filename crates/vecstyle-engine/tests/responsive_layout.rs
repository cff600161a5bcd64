use pretty_assertions::assert_eq;
use rstest::rstest;
use vecstyle_engine::layout::{
    ArtboardDescriptor, ArtboardGroup, LayoutOptions, PixelRange, ResponsiveCssGenerator,
    ResponsiveLayout, Responsiveness, data_attributes, is_usable_artboard,
};

fn group_from_names(names: &[(&str, u32)], default: Responsiveness) -> ArtboardGroup {
    let descriptors = names
        .iter()
        .filter(|(name, _)| is_usable_artboard(name))
        .map(|(name, measured)| ArtboardDescriptor::from_artboard_name(name, *measured, default))
        .collect();
    ArtboardGroup::try_new("graphic", descriptors).unwrap()
}

#[test]
fn three_artboards_from_names() {
    let group = group_from_names(
        &[
            ("Desktop:1200,dynamic", 1180),
            ("Mobile", 300),
            ("-Scratch", 50),
            ("Tablet:600", 640),
        ],
        Responsiveness::Fixed,
    );

    let layout = ResponsiveLayout::compute(&group, &LayoutOptions::default());

    let ids: Vec<_> = layout.artboards.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["Mobile", "Tablet", "Desktop"]);
    let visibility: Vec<_> = layout
        .artboards
        .iter()
        .map(|a| a.visibility_range)
        .collect();
    assert_eq!(
        visibility,
        vec![
            PixelRange::new(0, Some(599)),
            PixelRange::new(600, Some(1199)),
            PixelRange::new(1200, None),
        ]
    );
    let widths: Vec<_> = layout.artboards.iter().map(|a| a.width_range).collect();
    assert_eq!(
        widths,
        vec![
            PixelRange::new(0, Some(300)),
            PixelRange::new(600, Some(600)),
            PixelRange::new(1200, None),
        ]
    );

    insta::assert_snapshot!(layout.css(), @r"
    #g-graphic-box {
    	container-type:inline-size;
    	container-name:g-graphic-box;
    }
    @container g-graphic-box (width >= 600px) {
    #g-Mobile {
    	display:none;
    }
    }
    #g-Tablet {
    	display:none;
    }
    @container g-graphic-box (width >= 600px) and (width < 1200px) {
    #g-Tablet {
    	display:block;
    }
    }
    #g-Desktop {
    	display:none;
    }
    @container g-graphic-box (width >= 1200px) {
    #g-Desktop {
    	display:block;
    }
    }
    ");
}

#[test]
fn single_artboard_has_no_breakpoints() {
    let group = group_from_names(&[("Only", 720)], Responsiveness::Dynamic);
    let generator = ResponsiveCssGenerator::for_group("g-", &group);

    assert_eq!(generator.generate(&group.artboards()[0], group.artboards()), "");
    assert_eq!(
        ResponsiveLayout::compute(&group, &LayoutOptions::default()).css(),
        ""
    );
}

#[rstest]
#[case(&[400, 800])]
#[case(&[300, 600, 1200])]
#[case(&[1024, 320, 768, 1440, 480])]
fn visibility_ranges_tile_the_width_axis(#[case] widths: &[u32]) {
    let descriptors = widths
        .iter()
        .map(|&w| ArtboardDescriptor::new(format!("w{w}"), w, Responsiveness::Dynamic))
        .collect();
    let group = ArtboardGroup::try_new("g", descriptors).unwrap();

    let layout = ResponsiveLayout::compute(&group, &LayoutOptions::default());
    let ranges: Vec<_> = layout
        .artboards
        .iter()
        .map(|a| a.visibility_range)
        .collect();

    assert_eq!(ranges.first().map(|r| r.min), Some(0));
    assert_eq!(ranges.last().and_then(|r| r.max), None);
    for pair in ranges.windows(2) {
        assert_eq!(pair[0].max.map(|max| max + 1), Some(pair[1].min));
    }
}

#[test]
fn data_attributes_for_host_resizers() {
    let group = group_from_names(&[("Small", 320), ("Large", 960)], Responsiveness::Fixed);
    let layout = ResponsiveLayout::compute(&group, &LayoutOptions::default());

    let attributes: Vec<_> = layout
        .artboards
        .iter()
        .map(|a| data_attributes(&a.visibility_range))
        .collect();
    assert_eq!(
        attributes,
        vec![
            "data-min-width=\"0\" data-max-width=\"959\"".to_string(),
            "data-min-width=\"960\"".to_string(),
        ]
    );
}
