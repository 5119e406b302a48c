use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait Choose: Send {
    /// Returns an index in `0..len`. `len` is never zero.
    fn choose_index(&mut self, len: usize) -> usize;
}

impl Choose for StdRng {
    fn choose_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FixedChoice(pub usize);

impl Choose for FixedChoice {
    fn choose_index(&mut self, len: usize) -> usize {
        self.0.min(len - 1)
    }
}

pub fn chooser(seed: Option<u64>) -> Box<dyn Choose> {
    match seed {
        Some(s) => Box::new(StdRng::seed_from_u64(s)),
        None => Box::new(StdRng::from_entropy()),
    }
}

pub fn pick(chooser: &mut dyn Choose, mut options: Vec<String>) -> String {
    match options.len() {
        0 => String::new(),
        1 => options.swap_remove(0),
        len => {
            let idx = chooser.choose_index(len).min(len - 1);
            options.swap_remove(idx)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> Vec<String> {
        vec!["a".to_string(), "b".to_string(), "c".to_string()]
    }

    #[test]
    fn test_fixed_choice_clamps() {
        assert_eq!(pick(&mut FixedChoice(1), opts()), "b");
        assert_eq!(pick(&mut FixedChoice(9), opts()), "c");
    }

    #[test]
    fn test_seeded_chooser_is_reproducible() {
        let mut a = chooser(Some(7));
        let mut b = chooser(Some(7));
        for _ in 0..10 {
            assert_eq!(pick(a.as_mut(), opts()), pick(b.as_mut(), opts()));
        }
    }

    #[test]
    fn test_pick_stays_in_candidates() {
        let mut rng = chooser(None);
        for _ in 0..20 {
            assert!(opts().contains(&pick(rng.as_mut(), opts())));
        }
    }
}
