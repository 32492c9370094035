use rpsls::{GameRng, MatchConfig, MatchEngine, Move, Player, PlayerKind, ScriptedInput, Side};

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .sample_size(20)
        .measurement_time(std::time::Duration::from_secs(2));
    targets =
        playing_random_match,
        playing_long_match,
        tallying_history,
}

fn engine(seed: u64, threshold: u32) -> MatchEngine {
    let rng = GameRng::new(seed);
    let a = Player::new("Random", PlayerKind::RandomBot, rng.for_context("a"));
    let b = Player::new("Mixed", PlayerKind::MixedBot(Move::Scissors, 0.5), rng.for_context("b"));
    MatchEngine::new(a, b, MatchConfig::default().with_victory_threshold(threshold))
}

fn playing_random_match(c: &mut criterion::Criterion) {
    c.bench_function("play a first-to-3 bot match", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            engine(seed, 3).run_match(&mut ScriptedInput::default())
        })
    });
}

fn playing_long_match(c: &mut criterion::Criterion) {
    c.bench_function("play a first-to-1000 bot match", |b| {
        b.iter(|| engine(7, 1000).run_match(&mut ScriptedInput::default()))
    });
}

fn tallying_history(c: &mut criterion::Criterion) {
    let mut played = engine(11, 1000);
    let summary = played
        .run_match(&mut ScriptedInput::default())
        .expect("bot matches need no input");
    c.bench_function("tally a 1000-point history", |b| {
        b.iter(|| summary.games.tally(Side::Player))
    });
}
