//! Vibe engine benchmarks: bare and fully-populated evaluations.

use std::collections::BTreeMap;

use criterion::{criterion_group, criterion_main, Criterion};
use floq_core::types::Vibe;
use floq_vibe::patterns::{Chronotype, Consistency, EnergyType, PersonalPatterns, SocialType};
use floq_vibe::{EngineInputs, Occupancy, VenueIntelligence, VibeEngine};

fn full_inputs() -> EngineInputs {
    let temporal = (0..24u8)
        .map(|h| {
            let mut prefs = BTreeMap::new();
            prefs.insert(Vibe::ALL[h as usize % Vibe::COUNT], 0.6);
            (h, prefs)
        })
        .collect();

    EngineInputs {
        hour: 21,
        is_weekend: true,
        speed_mps: 1.1,
        screen_on_ratio01: 0.4,
        is_daylight: false,
        weather_energy_offset: Some(-0.1),
        weather_confidence_boost: Some(0.08),
        venue_arrived: true,
        dwell_minutes: Some(35.0),
        venue_intelligence: Some(VenueIntelligence {
            venue_id: "bench-venue".to_string(),
            name: None,
            primary_vibe: Vibe::Hype,
            vibe_confidence: 0.85,
            energy_level: 0.9,
            hourly_preference: Some(vec![0.5; 24]),
            occupancy: Some(Occupancy {
                current_count: 140,
                capacity: Some(200),
            }),
            is_open: Some(true),
            rating: Some(4.2),
        }),
        patterns: Some(PersonalPatterns {
            chronotype: Chronotype::Owl,
            energy_type: EnergyType::High,
            social_type: SocialType::Social,
            consistency: Consistency::VeryConsistent,
            temporal_preferences: Some(temporal),
            has_enough_data: true,
        }),
        patterns_enabled: true,
    }
}

fn evaluate_bare_benchmark(c: &mut Criterion) {
    let engine = VibeEngine::with_defaults();
    let inputs = EngineInputs::default();
    c.bench_function("evaluate_bare", |b| {
        b.iter(|| engine.evaluate(std::hint::black_box(&inputs)))
    });
}

fn evaluate_full_benchmark(c: &mut Criterion) {
    let engine = VibeEngine::with_defaults();
    let inputs = full_inputs();
    c.bench_function("evaluate_fully_populated", |b| {
        b.iter(|| engine.evaluate(std::hint::black_box(&inputs)))
    });
}

criterion_group!(benches, evaluate_bare_benchmark, evaluate_full_benchmark);
criterion_main!(benches);
