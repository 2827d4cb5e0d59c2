use terrain::{DVec2, DVec3, slope_with_flat};

fn main() {
    // A 10 m ramp at 20° followed by a 5 m landing
    let terrain = slope_with_flat(DVec2::new(2.0, 10.0), DVec2::new(2.0, 5.0), 20.0).unwrap();

    for geometry in &terrain {
        let (axis, angle) = geometry.orientation().to_axis_angle();
        println!(
            "position {:>28}  size {:>20}  tilt {:>6.2}° about {}",
            geometry.position().to_string(),
            geometry.size().to_string(),
            angle.to_degrees(),
            axis
        );
    }

    // The ramp's far edge in world space should sit on the landing
    let ramp = &terrain.static_geometry()[0];
    let far_edge = ramp.orientation() * DVec3::new(0.0, ramp.size().y, 0.0);
    println!("ramp far edge {far_edge}");
}
