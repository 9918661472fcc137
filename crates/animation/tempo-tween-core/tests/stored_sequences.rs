mod common;

use common::{approx, MemoryWorld};
use serde_json::json;
use tempo_tween_core::{
    animate_to_json, parse_animate_json, Axis, EasingFunction, Playback, PlaybackCommand,
    TargetProperty, TweenError,
};

fn fixture() -> String {
    json!({
        "sequences": [
            {
                "tweens": [
                    {
                        "ease": "QuadraticIn",
                        "duration": 2000,
                        "target": { "property": { "Translation": "X" }, "start": 0, "end": 5 }
                    },
                    { "duration": 500 },
                    {
                        "ease": "BounceOut",
                        "duration": 1000,
                        "target": { "property": { "Scale": "Y" }, "start": 1, "end": 2 }
                    }
                ]
            },
            {
                "tweens": [
                    { "duration": 250, "target": { "property": "Scalar", "start": 0, "end": 1 } }
                ]
            }
        ]
    })
    .to_string()
}

#[test]
fn parses_sequences_and_rebuilds_start_times() {
    let anim = parse_animate_json(&fixture()).expect("parse fixture");
    assert_eq!(anim.sequences.len(), 2);

    let seq = &anim.sequences[0];
    let starts: Vec<f32> = seq.iter().map(|tw| tw.start_abs()).collect();
    assert_eq!(starts, vec![0.0, 2000.0, 2500.0]);
    assert!(seq.tweens()[1].is_delay());
    assert_eq!(seq.tweens()[2].ease(), EasingFunction::BounceOut);
    assert_eq!(
        seq.tweens()[2].target().map(|t| t.property),
        Some(TargetProperty::Scale(Axis::Y))
    );

    // ease defaults to QuadraticIn
    assert_eq!(
        anim.sequences[1].tweens()[0].ease(),
        EasingFunction::QuadraticIn
    );
    assert_eq!(anim.end_time(), 3500.0);
}

#[test]
fn stored_start_times_are_ignored() {
    let raw = json!({
        "sequences": [ { "tweens": [
            { "duration": 100, "start_abs": 900 },
            { "duration": 100, "target": { "property": "Scalar", "start": 0, "end": 1 } }
        ] } ]
    })
    .to_string();
    let anim = parse_animate_json(&raw).unwrap();
    assert_eq!(anim.sequences[0].tweens()[1].start_abs(), 100.0);
}

#[test]
fn serializes_back_to_the_same_shape() {
    let anim = parse_animate_json(&fixture()).unwrap();
    let text = animate_to_json(&anim).unwrap();
    let back = parse_animate_json(&text).unwrap();
    assert_eq!(back, anim);
    assert!(!text.contains("start_abs"));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let raw = json!({
        "sequences": [ { "tweens": [ { "ease": "Elastic", "duration": 1 } ] } ]
    })
    .to_string();
    let err = parse_animate_json(&raw).unwrap_err();
    assert!(matches!(err, TweenError::Parse { .. }));
    assert!(parse_animate_json("not json").is_err());
}

#[test]
fn loaded_sequences_drive_playback() {
    let mut world = MemoryWorld::new();
    world.spawn_transform(3, parse_animate_json(&fixture()).unwrap());
    let mut pb = Playback::default();
    pb.apply(PlaybackCommand::Seek {
        time: 1000.0,
        update: false,
    })
    .unwrap();
    let out = world.tick(&mut pb);
    approx(world.translation(3)[0], 1.25, 1e-5);
    // entity 3 has no scalar component, but the scalar tween ended at 250 anyway
    assert_eq!(out.missing_targets().count(), 0);
    assert_eq!(pb.total_time(), 3500.0);
}
