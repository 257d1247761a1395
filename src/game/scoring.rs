use crate::BASE_POINTS;
use crate::CLUE_PENALTY;
use crate::EARLY_BONUS;
use crate::MAX_CLUES;
use crate::Points;
use crate::WRONG_PENALTY;

/// Pure scoring rule for one round. Never negative.
///
/// Each clue past the first costs 15. A correct guess earns the 100
/// base plus 10 for every unrevealed clue; a wrong guess loses a flat
/// 20 on top of the clue penalty. At one clue a correct guess is worth
/// 140, at two clues 115.
pub fn points(correct: bool, revealed: usize) -> Points {
    let penalty = CLUE_PENALTY * (revealed as Points - 1);
    if correct {
        let bonus = EARLY_BONUS * (MAX_CLUES as Points - revealed as Points).max(0);
        (BASE_POINTS - penalty + bonus).max(0)
    } else {
        (BASE_POINTS - penalty - WRONG_PENALTY).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_guess_anchors() {
        assert!(points(true, 1) == 140);
        assert!(points(true, 2) == 115);
        assert!(points(true, 3) == 90);
        assert!(points(true, 4) == 65);
        assert!(points(true, 5) == 40);
    }

    #[test]
    fn wrong_guess_anchors() {
        assert!(points(false, 1) == 80);
        assert!(points(false, 2) == 65);
        assert!(points(false, 3) == 50);
        assert!(points(false, 4) == 35);
        assert!(points(false, 5) == 20);
    }

    #[test]
    fn never_negative() {
        for revealed in 1..=MAX_CLUES {
            assert!(points(true, revealed) >= 0);
            assert!(points(false, revealed) >= 0);
        }
    }

    #[test]
    fn early_correct_beats_late_correct() {
        for revealed in 1..MAX_CLUES {
            assert!(points(true, revealed) > points(true, revealed + 1));
        }
    }
}
