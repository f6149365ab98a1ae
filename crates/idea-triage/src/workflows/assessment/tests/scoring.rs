use crate::workflows::assessment::scoring::{
    ScoreCard, ScoreSampler, SeededSampler, SubScores, ThreadRngSampler, SUB_SCORE_MAX,
    SUB_SCORE_MIN,
};

#[test]
fn thread_sampler_stays_within_bounds() {
    let sampler = ThreadRngSampler;
    for _ in 0..200 {
        let draw = sampler.draw();
        for value in [draw.efficiency, draw.quality, draw.customer_value] {
            assert!((SUB_SCORE_MIN..=SUB_SCORE_MAX).contains(&value));
        }
    }
}

#[test]
fn seeded_sampler_is_reproducible() {
    let a = SeededSampler::new(7);
    let b = SeededSampler::new(7);

    for _ in 0..16 {
        assert_eq!(a.draw(), b.draw());
    }
}

#[test]
fn seeded_sampler_stays_within_bounds() {
    let sampler = SeededSampler::new(99);
    for _ in 0..200 {
        let draw = sampler.draw();
        for value in [draw.efficiency, draw.quality, draw.customer_value] {
            assert!((SUB_SCORE_MIN..=SUB_SCORE_MAX).contains(&value));
        }
    }
}

#[test]
fn weighted_composite_follows_the_rubric() {
    let card = ScoreCard::from_draw(SubScores {
        efficiency: 80,
        quality: 80,
        customer_value: 80,
    });
    assert_eq!(card.weighted, 68.0);

    let card = ScoreCard::from_draw(SubScores {
        efficiency: 41,
        quality: 43,
        customer_value: 47,
    });
    // 0.30*41 + 0.30*43 + 0.25*47 = 36.95
    assert_eq!(card.weighted, 36.95);

    let card = ScoreCard::from_draw(SubScores {
        efficiency: 100,
        quality: 100,
        customer_value: 100,
    });
    assert_eq!(card.weighted, 85.0);
}

#[test]
fn weighted_is_rounded_to_two_decimals() {
    let sampler = SeededSampler::new(3);
    for _ in 0..100 {
        let card = ScoreCard::from_draw(sampler.draw());
        let scaled = card.weighted * 100.0;
        assert!((scaled - scaled.round()).abs() < 1e-9);
    }
}
