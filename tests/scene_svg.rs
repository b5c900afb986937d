use rectlink::{render_svg, Point, RectId, RenderConfig, Scene};

#[test]
fn test_default_scene_svg() {
    let svg = render_svg(&Scene::default(), &RenderConfig::default()).expect("render failure");

    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"width="800""#));
    assert!(svg.contains(r#"<rect x="580" y="180" width="40" height="40""#));
    assert!(svg.contains(r#"<rect x="760" y="160" width="80" height="80""#));
    assert!(svg.contains("<polyline"));
    assert!(svg.ends_with("</svg>"));
}

#[test]
fn test_scene_from_json() {
    // field names follow the scene document format: position is the
    // rectangle's center
    let input = r#"{
        "first": {"position": {"x": 600, "y": 200}, "size": {"width": 40, "height": 40}},
        "second": {"position": {"x": 800, "y": 200}, "size": {"width": 80, "height": 80}}
    }"#;
    let scene = Scene::from_json(input).expect("parse failure");
    assert_eq!(scene, Scene::default());

    assert!(Scene::from_json("{}").is_err());
    assert!(Scene::from_json("not json").is_err());
}

#[test]
fn test_render_str_pipeline() {
    let input = Scene::default().to_json().expect("test");
    let svg = rectlink::render_str(&input, &RenderConfig::default()).expect("test");
    assert!(svg.contains("<polyline points=\"620,200"));
}

#[test]
fn test_render_stream() {
    let mut input = std::io::Cursor::new(Scene::default().to_json().expect("test"));
    let mut output: Vec<u8> = vec![];
    rectlink::render_stream(&mut input, &mut output, &RenderConfig::default())
        .expect("render failure");
    let svg = String::from_utf8(output).expect("utf8 output");
    assert!(svg.starts_with("<svg"));
}

#[test]
fn test_connector_tracks_scene_edits() {
    let mut scene = Scene::default();
    let before = scene.connector();

    scene.rect_mut(RectId::Second).position = Point::new(600., 500.);
    let after = scene.connector();

    assert_ne!(before, after);
    // second rectangle is now directly below: connector runs vertically
    assert_eq!(after[0], Point::new(600., 220.));
    assert_eq!(*after.last().expect("non-empty"), Point::new(600., 460.));
}
