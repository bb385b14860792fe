use std::f32::consts::{FRAC_PI_2, TAU};

use glam::{Mat4, Vec3, Vec4};

use crate::{shader, Camera, Clock, Colour, Mesh, Ticker, Uniforms, Vertex};

const EPSILON: f32 = 1e-4;

#[test]
fn test_clock_running_sum() {
    let deltas = [0.0, 16.0, 0.5, 33.25, 1000.0, 7.125];

    let mut clock = Clock::new();
    let mut expected = 0.0;
    for delta in deltas {
        clock.advance(delta);
        expected += delta;
        assert_eq!(clock.elapsed_ms(), expected);
    }

    let mut reversed = Clock::new();
    deltas.iter().rev().for_each(|&d| reversed.advance(d));
    assert_eq!(clock, reversed);
}

#[test]
fn test_clock_passes_negative_delta() {
    let mut clock = Clock::new();
    clock.advance(10.0);
    clock.advance(-4.0);
    assert_eq!(clock.elapsed_ms(), 6.0);
}

#[test]
fn test_elapsed_secs_after_long_session() {
    // A million orbits plus a quarter second.
    let mut clock = Clock::new();
    clock.advance((std::f64::consts::TAU * 1e6 + 0.25) * 1000.0);
    let secs = clock.elapsed_secs();
    assert!((secs - 0.25).abs() < 1e-5);
    assert!(Camera::eye(secs).abs_diff_eq(Camera::eye(0.25), 1e-3));

    let mut clock = Clock::new();
    clock.advance(-250.0);
    assert!((clock.elapsed_secs() - (TAU - 0.25)).abs() < 1e-5);
}

#[test]
fn test_ticker_deltas() {
    let mut ticker = Ticker::new(100.0);
    let mut clock = Clock::new();

    for now in [116.5, 133.0, 133.0, 150.25] {
        clock.advance(ticker.delta(now));
    }

    assert_eq!(clock.elapsed_ms(), 50.25);
    assert_eq!(ticker.delta(160.25), 10.0);
}

#[test]
fn test_eye_orbit() {
    assert!(Camera::eye(0.0).abs_diff_eq(Vec3::new(4.0, 0.0, 0.0), EPSILON));
    assert!(Camera::eye(FRAC_PI_2).abs_diff_eq(Vec3::new(0.0, 0.0, 4.0), EPSILON));

    for i in 0..64 {
        let eye = Camera::eye(i as f32 * 0.37);
        assert!((eye.length() - Camera::ORBIT_RADIUS).abs() < EPSILON);
        assert_eq!(eye.y, 0.0);
    }
}

#[test]
fn test_perspective_periodic() {
    for i in 0..32 {
        let t = i as f32 * 0.2;
        assert!(Camera::perspective(t).abs_diff_eq(Camera::perspective(t + TAU), 1e-3));
    }
}

// GL perspective matrix for fovY 45 degrees, aspect 1, near 0.01, far 100.
#[rustfmt::skip]
fn gl_projection() -> Mat4 {
    let (near, far) = (0.01_f32, 100.0_f32);
    let f = 1.0 / 22.5_f32.to_radians().tan();

    Mat4::from_cols_array(&[
        f, 0.0, 0.0, 0.0,
        0.0, f, 0.0, 0.0,
        0.0, 0.0, -(far + near) / (far - near), -1.0,
        0.0, 0.0, -2.0 * far * near / (far - near), 0.0,
    ])
}

fn ndc(m: Mat4, point: Vec3) -> Vec3 {
    let clip = m * point.extend(1.0);
    clip.truncate() / clip.w
}

#[test]
fn test_projection_matrix() {
    assert!(Camera::projection().abs_diff_eq(gl_projection(), 1e-5));
    assert_eq!(Uniforms::at(1.3).perspective, Camera::perspective(1.3));
}

#[test]
fn test_projection_depth_range() {
    let near = ndc(Camera::projection(), Vec3::new(0.0, 0.0, -Camera::NEAR));
    let far = ndc(Camera::projection(), Vec3::new(0.0, 0.0, -Camera::FAR));

    assert!((near.z + 1.0).abs() < 1e-4);
    assert!((far.z - 1.0).abs() < 1e-4);
}

#[test]
fn test_off_axis_projection() {
    let f = 1.0 / 22.5_f32.to_radians().tan();
    let m = Camera::perspective(0.0);

    // Looking down -x from (4, 0, 0): world +y is screen up, world +z is
    // screen left.
    let up = ndc(m, Vec3::Y);
    assert!(up.x.abs() < EPSILON);
    assert!((up.y - f / 4.0).abs() < EPSILON);

    let left = ndc(m, Vec3::Z);
    assert!((left.x + f / 4.0).abs() < EPSILON);
    assert!(left.y.abs() < EPSILON);
}

#[test]
fn test_origin_at_centre_of_clip_space() {
    let uniforms = Uniforms::at(2.0);
    let origin = Vertex::new(Vec3::ZERO, Vec3::ONE);
    let (clip, _) = shader::vertex(&uniforms, &origin);

    let ndc = clip / clip.w;
    assert!(ndc.x.abs() < EPSILON);
    assert!(ndc.y.abs() < EPSILON);

    // Four units away, between the near and far planes.
    assert!((clip.w - Camera::ORBIT_RADIUS).abs() < EPSILON);
    assert!(ndc.z > -1.0 && ndc.z < 1.0);
}

#[test]
fn test_frame_sequence() {
    let mut clock = Clock::new();
    for delta in [16.7, 16.7, 16.6] {
        clock.advance(delta);
    }

    assert!((clock.elapsed_ms() - 50.0).abs() < 1e-9);
    assert!((clock.elapsed_secs() - 0.05).abs() < 1e-6);

    let eye = Camera::eye(clock.elapsed_secs());
    assert!(eye.abs_diff_eq(Vec3::new(3.995, 0.0, 0.200), 1e-3));
}

#[test]
fn test_triangle_mesh() {
    let mesh = Mesh::triangle();
    assert_eq!(mesh.triangles().len(), 1);
    assert_eq!(mesh.vertex_count(), 3);

    let colours: Vec<Vec3> = mesh.vertices().map(|v| v.colour).collect();
    assert_eq!(colours, vec![Vec3::X, Vec3::Y, Vec3::Z]);

    let positions: Vec<Vec3> = mesh.vertices().map(|v| v.position).collect();
    assert_eq!(
        positions,
        vec![
            Vec3::ZERO,
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0)
        ]
    );
}

#[test]
fn test_interleaved_layout() {
    let data = Mesh::triangle().interleaved();
    assert_eq!(data.len(), 3 * Vertex::STRIDE);

    // Second vertex: position (1, 1, 0), colour green.
    let second = &data[Vertex::STRIDE..2 * Vertex::STRIDE];
    assert_eq!(&second[..Vertex::COLOUR_OFFSET], &[1.0, 1.0, 0.0]);
    assert_eq!(&second[Vertex::COLOUR_OFFSET..], &[0.0, 1.0, 0.0]);
}

#[test]
fn test_vertex_stage_forwards_colour() {
    let uniforms = Uniforms::at(0.7);
    for vertex in Mesh::triangle().vertices() {
        let (clip, colour) = shader::vertex(&uniforms, vertex);
        assert_eq!(colour, vertex.colour);
        assert_eq!(clip, uniforms.perspective * Vec4::from((vertex.position, 1.0)));
    }
}

#[test]
fn test_fragment_opaque() {
    for rgb in [Vec3::ZERO, Vec3::X, Vec3::new(0.2, 0.4, 0.6), Vec3::splat(7.0)] {
        let colour = shader::fragment(rgb);
        assert_eq!(colour.a(), 1.0);
        assert_eq!((colour.r(), colour.g(), colour.b()), (rgb.x, rgb.y, rgb.z));
    }
    assert_eq!(shader::fragment(Vec3::ZERO), Colour::BLACK);
}
