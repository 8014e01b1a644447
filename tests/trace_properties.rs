//! End-to-end tracing properties
//!
//! These tests build small scenes by hand and check the observable behavior
//! of `trace`: background on miss, unlit colors, deterministic tie-breaking,
//! shadow suppression and the intensity clamp.

use glam::Vec3A;
use image::Rgba;
use raycast::{
    compute_lighting, trace, Color, Interval, Light, Material, Ray, RenderConfig, RenderMode, Scene, Sphere,
};

const BACKGROUND: Color = Rgba([12, 34, 56, 255]);

fn config(mode: RenderMode) -> RenderConfig {
    mode.into()
}

/// Reference scenario: one red sphere, an ambient and a point light.
fn red_sphere_scene() -> Scene {
    Scene {
        spheres: vec![Sphere::new(
            Vec3A::new(0.0, 1.0, 3.0),
            1.0,
            Material::shiny(Rgba([255, 0, 0, 255]), 500.0),
        )],
        lights: vec![Light::ambient(0.2), Light::point(Vec3A::new(2.0, 1.0, 0.0), 0.6)],
        background: BACKGROUND,
    }
}

#[test]
fn test_miss_returns_exact_background() {
    let scene = red_sphere_scene();
    let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, -1.0, 1.0));
    for mode in RenderMode::ALL {
        assert_eq!(trace(&scene, &config(mode), &r, Interval::PRIMARY), BACKGROUND);
    }
}

#[test]
fn test_unlit_hit_returns_sphere_color_with_alpha() {
    let color = Rgba([17, 99, 201, 80]);
    let scene = Scene {
        spheres: vec![Sphere::new(Vec3A::new(0.0, 0.0, 6.0), 1.5, Material::shiny(color, 30.0))],
        lights: vec![Light::point(Vec3A::new(0.0, 0.0, 100.0), 0.3)],
        background: BACKGROUND,
    };
    let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, 1.0));
    assert_eq!(trace(&scene, &config(RenderMode::Flat), &r, Interval::PRIMARY), color);
}

#[test]
fn test_reference_scenario_is_partially_lit() {
    let scene = red_sphere_scene();
    // Towards the sphere's point nearest the camera, through the viewport plane at z = 1
    let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 1.0 / 3.0, 1.0));
    let color = trace(&scene, &config(RenderMode::Shadows), &r, Interval::PRIMARY);

    assert!(color.0[0] > 0 && color.0[0] < 255, "red channel {} should be partial", color.0[0]);
    assert_eq!(color.0[1], 0);
    assert_eq!(color.0[2], 0);
    assert_eq!(color.0[3], 255);
}

#[test]
fn test_identical_overlapping_spheres_resolve_to_first() {
    let first = Material::matte(Rgba([255, 0, 0, 255]));
    let second = Material::matte(Rgba([0, 0, 255, 255]));
    let scene = Scene {
        spheres: vec![
            Sphere::new(Vec3A::new(0.0, 0.0, 5.0), 1.0, first),
            Sphere::new(Vec3A::new(0.0, 0.0, 5.0), 1.0, second),
        ],
        lights: Vec::new(),
        background: BACKGROUND,
    };
    let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.1, 0.05, 1.0));
    for _ in 0..5 {
        assert_eq!(trace(&scene, &config(RenderMode::Flat), &r, Interval::PRIMARY), first.color);
    }
}

#[test]
fn test_occluded_point_light_contributes_nothing() {
    // Shading point on top of a ground sphere, an occluder directly above it
    let ground = Sphere::new(Vec3A::new(0.0, -1.0, 5.0), 1.0, Material::shiny(Rgba([200, 200, 200, 255]), 10.0));
    let occluder = Sphere::new(Vec3A::new(0.0, 2.0, 5.0), 0.5, Material::matte(Rgba([0, 0, 0, 255])));
    let point = Vec3A::new(0.0, 0.0, 5.0);
    let normal = Vec3A::Y;
    let view = Vec3A::new(0.0, 0.0, -5.0);

    let blocked = Light::point(Vec3A::new(0.0, 4.0, 5.0), 0.5);
    let clear = Light::point(Vec3A::new(4.0, 4.0, 5.0), 0.3);

    let scene_with = |lights: Vec<Light>| Scene {
        spheres: vec![ground.clone(), occluder.clone()],
        lights,
        background: BACKGROUND,
    };
    let shadows = config(RenderMode::Shadows);
    let specular = Some(10.0);

    let both = compute_lighting(&scene_with(vec![blocked, clear]), &shadows, point, normal, view, specular);
    let clear_only = compute_lighting(&scene_with(vec![clear]), &shadows, point, normal, view, specular);
    let blocked_only = compute_lighting(&scene_with(vec![blocked]), &shadows, point, normal, view, specular);

    assert_eq!(blocked_only, 0.0);
    assert!(clear_only > 0.0);
    assert!((both - clear_only).abs() < 1e-6);

    // Without shadows the blocked light shows up again
    let no_shadows = compute_lighting(
        &scene_with(vec![blocked, clear]),
        &config(RenderMode::Specular),
        point,
        normal,
        view,
        specular,
    );
    assert!(no_shadows > both);
}

#[test]
fn test_channels_never_exceed_base_color() {
    let base = Rgba([180, 90, 45, 255]);
    let scene = Scene {
        spheres: vec![Sphere::new(Vec3A::new(0.0, 0.0, 4.0), 1.0, Material::shiny(base, 5.0))],
        lights: vec![
            Light::ambient(0.9),
            Light::point(Vec3A::new(0.0, 0.0, 0.0), 2.0),
            Light::directional(Vec3A::new(0.0, 0.0, -1.0), 3.0),
        ],
        background: BACKGROUND,
    };

    for mode in RenderMode::ALL {
        for i in -10..=10 {
            for j in -10..=10 {
                let r = Ray::new(Vec3A::ZERO, Vec3A::new(i as f32 * 0.03, j as f32 * 0.03, 1.0));
                let c = trace(&scene, &config(mode), &r, Interval::PRIMARY);
                if c == BACKGROUND {
                    continue;
                }
                for k in 0..3 {
                    assert!(c.0[k] <= base.0[k], "channel {} brightened: {:?}", k, c);
                }
            }
        }
    }
}

#[test]
fn test_hit_point_independent_of_direction_scale() {
    let scene = red_sphere_scene();
    let direction = Vec3A::new(0.1, 0.9, 3.0);
    let diffuse = config(RenderMode::Diffuse);
    let window = Interval::new(0.0, f32::INFINITY);

    let near = trace(&scene, &diffuse, &Ray::new(Vec3A::ZERO, direction), window);
    let far = trace(&scene, &diffuse, &Ray::new(Vec3A::ZERO, 4.0 * direction), window);
    assert_ne!(near, BACKGROUND);
    assert!((near.0[0] as i16 - far.0[0] as i16).abs() <= 1, "{:?} vs {:?}", near, far);
}

#[test]
fn test_light_color_does_not_tint() {
    let mut scene = red_sphere_scene();
    let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 1.0 / 3.0, 1.0));
    let before = trace(&scene, &config(RenderMode::Shadows), &r, Interval::PRIMARY);

    for light in &mut scene.lights {
        light.color = Rgba([0, 0, 255, 255]);
    }
    let after = trace(&scene, &config(RenderMode::Shadows), &r, Interval::PRIMARY);
    assert_eq!(before, after);
}
