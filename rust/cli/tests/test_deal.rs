use holdem_cli::run;

#[test]
fn seeded_deals_are_reproducible() {
    let deal = || {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(
            ["holdem", "deal", "--players", "5", "--seed", "7"],
            &mut out,
            &mut err,
        );
        assert_eq!(code, 0);
        String::from_utf8(out).unwrap()
    };
    assert_eq!(deal(), deal());
}

#[test]
fn different_seeds_deal_different_hands() {
    let deal = |seed: &str| {
        let mut out = Vec::new();
        let mut err = Vec::new();
        run(["holdem", "deal", "--seed", seed], &mut out, &mut err);
        String::from_utf8(out).unwrap()
    };
    assert_ne!(deal("1"), deal("2"));
}

#[test]
fn output_covers_every_seat_and_street() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(
        ["holdem", "deal", "--players", "9", "--seed", "42"],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 0);
    let stdout = String::from_utf8(out).unwrap();
    for seat in 0..9 {
        assert!(stdout.contains(&format!("Seat {}:", seat)));
    }
    assert!(stdout.contains("Flop:"));
    assert!(stdout.contains("Turn:"));
    assert!(stdout.contains("River:"));
}
