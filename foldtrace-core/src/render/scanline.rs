use glam::DVec2;

use rayon::prelude::*;

use crate::{
    field::sdf::DistanceField,
    foundation::error::{FoldtraceError, FoldtraceResult},
    render::frame::{FrameRgba, PixelRgba, RowResult},
    render::shade::shade,
    scene::config::SceneConfig,
    trace::camera::CameraBasis,
    trace::march::march,
};

/// Threading controls for the row-parallel renderer.
#[derive(Clone, Debug)]
pub struct RenderThreading {
    /// Render scanlines on a worker pool when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count (pool size cap).
    pub threads: Option<usize>,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: true,
            threads: None,
        }
    }
}

/// Render a scene to a complete frame.
///
/// This is the primary "one-shot" API for producing pixels from a
/// [`SceneConfig`]. The image is partitioned into independent scanline tasks
/// (one [`RowResult`] per row) executed on a fixed-size worker pool, then
/// assembled into a pre-allocated frame keyed by row index. The final frame is
/// bit-identical across runs and across sequential/parallel execution: each
/// pixel depends only on its coordinates and the scene constants, and assembly
/// never depends on completion order.
///
/// `render(scene, 0, 0, ..)` returns an empty frame without spawning row tasks.
/// Per-pixel numeric surprises produce background pixels (the render is a
/// best-effort visualization); only request-level problems — invalid scene,
/// degenerate camera basis, pool construction — surface as errors.
#[tracing::instrument(skip(scene, threading))]
pub fn render(
    scene: &SceneConfig,
    width: u32,
    height: u32,
    threading: &RenderThreading,
) -> FoldtraceResult<FrameRgba> {
    scene.validate()?;

    let mut frame = FrameRgba::new(width, height);
    if width == 0 || height == 0 {
        return Ok(frame);
    }

    let basis = CameraBasis::from_scene(scene)?;
    let field = DistanceField::new(scene);

    let rows: Vec<RowResult> = if threading.parallel {
        let pool = build_thread_pool(threading.threads)?;
        pool.install(|| {
            (0..height)
                .into_par_iter()
                .map(|y| render_row(y, width, height, scene, &field, &basis))
                .collect()
        })
    } else {
        (0..height)
            .map(|y| render_row(y, width, height, scene, &field, &basis))
            .collect()
    };

    for row in &rows {
        frame.place_row(row)?;
    }

    tracing::debug!(width, height, rows = rows.len(), "render complete");
    Ok(frame)
}

/// Render every pixel of one scanline. Infallible by policy: anything that
/// goes numerically wrong inside a row collapses to background pixels.
fn render_row(
    row_index: u32,
    width: u32,
    height: u32,
    scene: &SceneConfig,
    field: &DistanceField,
    basis: &CameraBasis,
) -> RowResult {
    let mut pixels = Vec::with_capacity(width as usize);
    for x in 0..width {
        pixels.push(render_pixel(x, row_index, width, height, scene, field, basis));
    }
    RowResult { row_index, pixels }
}

fn render_pixel(
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    scene: &SceneConfig,
    field: &DistanceField,
    basis: &CameraBasis,
) -> PixelRgba {
    // Pixel offset from the image center, normalized by the shorter dimension
    // (integer halving keeps odd dimensions stable and reproducible).
    let shorter = f64::from(width.min(height));
    let uv = DVec2::new(
        f64::from(x) - f64::from(width / 2),
        f64::from(y) - f64::from(height / 2),
    ) / shorter
        * scene.uv_zoom;

    let ray = basis.ray_direction(uv);
    let result = march(scene.camera_eye, ray, field, scene);
    let intensity = if result.hit {
        shade(scene.camera_eye + ray * result.distance, field, scene)
    } else {
        0.0
    };
    PixelRgba::from_intensity(intensity)
}

/// Build the fixed-size worker pool for scanline fan-out.
fn build_thread_pool(threads: Option<usize>) -> FoldtraceResult<rayon::ThreadPool> {
    if threads == Some(0) {
        return Err(FoldtraceError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| FoldtraceError::render(format!("failed to build worker pool: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn empty_render_returns_an_empty_frame() {
        let scene = SceneConfig::default();
        let frame = render(&scene, 0, 0, &RenderThreading::default()).unwrap();
        assert_eq!((frame.width, frame.height), (0, 0));
        assert!(frame.data.is_empty());

        let frame = render(&scene, 8, 0, &RenderThreading::default()).unwrap();
        assert!(frame.data.is_empty());
    }

    #[test]
    fn zero_worker_threads_is_rejected() {
        let scene = SceneConfig::default();
        let threading = RenderThreading {
            parallel: true,
            threads: Some(0),
        };
        assert!(matches!(
            render(&scene, 4, 4, &threading),
            Err(FoldtraceError::Validation(_))
        ));
    }

    #[test]
    fn parallel_and_sequential_frames_are_byte_identical() {
        let scene = SceneConfig::default();
        let sequential = render(
            &scene,
            32,
            24,
            &RenderThreading {
                parallel: false,
                threads: None,
            },
        )
        .unwrap();
        let parallel = render(
            &scene,
            32,
            24,
            &RenderThreading {
                parallel: true,
                threads: Some(3),
            },
        )
        .unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn camera_looking_away_from_the_scene_renders_black() {
        let mut scene = SceneConfig::default();
        // Look from the eye directly away from the origin.
        scene.camera_target = scene.camera_eye * 2.0;
        let frame = render(&scene, 16, 12, &RenderThreading::default()).unwrap();
        for chunk in frame.data.chunks_exact(4) {
            assert_eq!(chunk, [0, 0, 0, 255]);
        }
    }

    #[test]
    fn degenerate_camera_fails_the_whole_request() {
        let mut scene = SceneConfig::default();
        scene.camera_eye = DVec3::new(0.0, -5.0, 0.0);
        scene.camera_target = DVec3::ZERO;
        assert!(matches!(
            render(&scene, 4, 4, &RenderThreading::default()),
            Err(FoldtraceError::Camera(_))
        ));
    }
}
