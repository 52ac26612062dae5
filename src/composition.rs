use serde::Serialize;

/// How many characters of each class a password contains.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Composition {
    pub lowercase: usize,
    pub uppercase: usize,
    pub digits: usize,
    /// Everything that isn't an ASCII letter or digit, whitespace included.
    pub symbols: usize,
}

impl Composition {
    pub fn tally(password: &str) -> Composition {
        let mut counts = Composition::default();
        for ch in password.chars() {
            match ch {
                'a'..='z' => counts.lowercase += 1,
                'A'..='Z' => counts.uppercase += 1,
                '0'..='9' => counts.digits += 1,
                _ => counts.symbols += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.lowercase + self.uppercase + self.digits + self.symbols
    }

    /// Counts in chart order: lowercase, uppercase, digits, symbols.
    pub fn as_array(&self) -> [usize; 4] {
        [self.lowercase, self.uppercase, self.digits, self.symbols]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_each_class() {
        let c = Composition::tally("aB3$ xY");
        assert_eq!(
            c,
            Composition {
                lowercase: 2,
                uppercase: 2,
                digits: 1,
                symbols: 2,
            }
        );
    }

    #[test]
    fn non_ascii_letters_are_symbols() {
        let c = Composition::tally("ñÉ٣");
        assert_eq!(c.symbols, 3);
        assert_eq!(c.lowercase + c.uppercase + c.digits, 0);
    }

    #[test]
    fn counts_sum_to_length() {
        for pw in ["", "abc", "Str0ng!Pass", "tab\there", "emoji 🔑 key", "ÀÉÎõü123"] {
            assert_eq!(Composition::tally(pw).total(), pw.chars().count(), "{pw:?}");
        }
    }
}
