use pas_system::{Planet, Surface, System};

use crate::pas::pas_json;

fn sample_system() -> System {
    let mut system = System::new("Sample", "A sample system");
    system.planets.push(
        Planet::new("Starting Planet 1", 10000, Surface::new(1, 400, 50, 100))
            .at_position(25000.0, 0.0)
            .with_velocity(0.0, 126.0)
            .starting(),
    );
    system
}

#[test]
fn test_pas_content_is_a_one_element_array() {
    let json = pas_json(&sample_system()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let array = value.as_array().expect("top-level value must be an array");
    assert_eq!(array.len(), 1);
    assert_eq!(array[0]["name"], "Sample");
}

#[test]
fn test_pas_content_is_pretty_printed() {
    let json = pas_json(&sample_system()).unwrap();
    assert!(
        json.contains('\n'),
        "pretty-printed output should span multiple lines"
    );
}

#[test]
fn test_planets_nest_in_placement_order() {
    let mut system = sample_system();
    system.planets.push(
        Planet::new("Resource Planet 1", 5000, Surface::new(2, 300, 60, 48))
            .at_position(0.0, 40000.0)
            .with_velocity(-100.0, 0.0),
    );

    let json = pas_json(&system).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let planets = value[0]["planets"].as_array().unwrap();

    assert_eq!(planets.len(), 2);
    assert_eq!(planets[0]["name"], "Starting Planet 1");
    assert_eq!(planets[1]["name"], "Resource Planet 1");
}
