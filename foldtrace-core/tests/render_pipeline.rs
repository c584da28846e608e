use foldtrace::{RenderThreading, SceneConfig, encode_png, render};

#[test]
fn repeated_renders_are_byte_identical() {
    let scene = SceneConfig::default();
    let threading = RenderThreading::default();

    let a = render(&scene, 64, 48, &threading).unwrap();
    let b = render(&scene, 64, 48, &threading).unwrap();
    assert_eq!(a.data, b.data);
}

#[test]
fn every_pixel_is_opaque_grayscale() {
    let scene = SceneConfig::default();
    let frame = render(&scene, 64, 48, &RenderThreading::default()).unwrap();

    assert_eq!(frame.data.len(), 64 * 48 * 4);
    for px in frame.data.chunks_exact(4) {
        assert_eq!(px[0], px[1]);
        assert_eq!(px[1], px[2]);
        assert_eq!(px[3], 255);
    }
}

#[test]
fn canonical_scene_shows_a_fractal_silhouette() {
    // The canonical scene at 512x384 must produce a visible object: the
    // central region holds both lit surface pixels and background pixels,
    // so the silhouette is neither empty nor full-frame.
    let (width, height) = (512u32, 384u32);
    let scene = SceneConfig::default();
    let frame = render(&scene, width, height, &RenderThreading::default()).unwrap();

    let mut lit = 0u32;
    let mut background = 0u32;
    for y in height / 3..height * 2 / 3 {
        for x in width / 3..width * 2 / 3 {
            if frame.pixel(x, y).r > 0 {
                lit += 1;
            } else {
                background += 1;
            }
        }
    }
    assert!(lit > 0, "central region rendered entirely background");
    assert!(background > 0, "central region rendered entirely surface");
}

#[test]
fn rendered_frame_encodes_to_png() {
    let scene = SceneConfig::default();
    let frame = render(&scene, 32, 24, &RenderThreading::default()).unwrap();
    let bytes = encode_png(&frame).unwrap();

    assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
    let decoded = image_dims(&bytes);
    assert_eq!(decoded, (32, 24));
}

// Minimal PNG IHDR peek; keeps this test independent of decoder behavior.
fn image_dims(png: &[u8]) -> (u32, u32) {
    let w = u32::from_be_bytes(png[16..20].try_into().unwrap());
    let h = u32::from_be_bytes(png[20..24].try_into().unwrap());
    (w, h)
}
