//! End-to-end checks of the library: generate, rate, tally and advise.

use std::io::Write;

use passlab::password_generation::generate_random_password;
use passlab::{
    analyze, suggest_improvements, CharClasses, CommonPasswords, Composition, Strength, Suggestion,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn generated_passwords_respect_length_and_alphabet() {
    let mut rng = StdRng::seed_from_u64(2024);
    for uppercase in [false, true] {
        for digits in [false, true] {
            for symbols in [false, true] {
                let classes = CharClasses {
                    uppercase,
                    digits,
                    symbols,
                };
                let alphabet = classes.alphabet();
                for len in [0, 5, 12, 40] {
                    let pw = generate_random_password(&mut rng, classes, len);
                    assert_eq!(pw.as_str().chars().count(), len);
                    assert!(pw.as_str().chars().all(|c| alphabet.contains(&c)));
                }
            }
        }
    }
}

#[test]
fn composition_of_generated_password_sums_to_length() {
    let mut rng = StdRng::seed_from_u64(11);
    let pw = generate_random_password(&mut rng, CharClasses::all(), 64);
    assert_eq!(Composition::tally(pw.as_str()).total(), 64);
}

#[test]
fn long_all_class_password_is_strong() {
    // The odds of 256 draws from the 87-character alphabet missing a class are below 1e-13.
    let mut rng = StdRng::seed_from_u64(5);
    let pw = generate_random_password(&mut rng, CharClasses::all(), 256);
    let composition = Composition::tally(pw.as_str());
    assert!(composition.uppercase > 0);
    assert!(composition.digits > 0);
    assert!(composition.symbols > 0);
    assert_eq!(analyze(pw.as_str()), Strength::Strong);
}

#[test]
fn common_list_from_disk_flags_members() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "123456\npassword\nStr0ng!Pass\n").unwrap();
    let common = CommonPasswords::load(file.path()).unwrap();
    assert_eq!(common.len(), Some(4));

    let suggestions = suggest_improvements("Str0ng!Pass", &common).unwrap();
    assert_eq!(suggestions, [Suggestion::AvoidCommonPasswords]);

    let suggestions = suggest_improvements("Str0ng!Pass2", &common).unwrap();
    assert_eq!(suggestions, [Suggestion::Strong]);
}

#[test]
fn missing_common_list_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = CommonPasswords::load(&dir.path().join("missing.txt")).unwrap_err();
    assert!(!err.is_not_loaded());
}

#[test]
fn unloaded_common_list_is_detectable() {
    let err = suggest_improvements("abc", &CommonPasswords::NotLoaded).unwrap_err();
    assert!(err.is_not_loaded());
}

#[test]
fn suggestions_for_short_password() {
    let suggestions = suggest_improvements("abc", &CommonPasswords::empty()).unwrap();
    assert!(suggestions.contains(&Suggestion::IncreaseLength));
}

#[test]
fn demo_entries_match_analysis() {
    for entry in passlab::demo::entries() {
        assert_eq!(entry.strength, analyze(entry.password));
    }
}
