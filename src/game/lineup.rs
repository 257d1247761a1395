use crate::MAX_CLUES;
use crate::content::Clue;
use crate::content::Reliability;

/// The clues selected for one round, reveal order frozen at
/// construction. At most five: the first High, up to two Medium, up to
/// two Low, then backfill from whatever tiers still have clues left,
/// High first. Deterministic given a fixed pool order.
#[derive(Debug, Clone)]
pub struct Lineup(Vec<Clue>);

impl From<&[Clue]> for Lineup {
    fn from(pool: &[Clue]) -> Self {
        let tier = |r: Reliability| pool.iter().filter(move |c| c.reliability == r);
        let highs = tier(Reliability::High).collect::<Vec<&Clue>>();
        let meds = tier(Reliability::Medium).collect::<Vec<&Clue>>();
        let lows = tier(Reliability::Low).collect::<Vec<&Clue>>();
        let mut picked = Vec::with_capacity(MAX_CLUES);
        picked.extend(highs.first().copied());
        picked.extend(meds.iter().take(2).copied());
        picked.extend(lows.iter().take(2).copied());
        for clue in std::iter::empty()
            .chain(highs.iter().skip(1))
            .chain(meds.iter().skip(2))
            .chain(lows.iter().skip(2))
            .copied()
        {
            if picked.len() >= MAX_CLUES {
                break;
            }
            picked.push(clue);
        }
        Self(picked.into_iter().cloned().collect())
    }
}

impl Lineup {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn clues(&self) -> &[Clue] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Category;

    fn clue(text: &str, reliability: Reliability) -> Clue {
        Clue {
            text: text.to_string(),
            reliability,
            category: Category::Behavioral,
            rationale: String::new(),
        }
    }

    #[test]
    fn canonical_order_with_rich_pool() {
        use Reliability::*;
        let pool = vec![
            clue("l1", Low),
            clue("m1", Medium),
            clue("h1", High),
            clue("m2", Medium),
            clue("l2", Low),
            clue("h2", High),
            clue("m3", Medium),
        ];
        let lineup = Lineup::from(pool.as_slice());
        let texts = lineup
            .clues()
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>();
        assert!(texts == vec!["h1", "m1", "m2", "l1", "l2"]);
        let tiers = lineup
            .clues()
            .iter()
            .map(|c| c.reliability)
            .collect::<Vec<_>>();
        assert!(tiers == vec![High, Medium, Medium, Low, Low]);
    }

    #[test]
    fn short_pool_returned_whole() {
        use Reliability::*;
        let pool = vec![clue("m1", Medium), clue("l1", Low), clue("m2", Medium)];
        let lineup = Lineup::from(pool.as_slice());
        assert!(lineup.len() == 3);
        let texts = lineup
            .clues()
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>();
        assert!(texts == vec!["m1", "m2", "l1"]);
        let mut unique = texts.clone();
        unique.dedup();
        assert!(unique.len() == texts.len());
    }

    #[test]
    fn backfill_prefers_remaining_highs() {
        use Reliability::*;
        let pool = vec![
            clue("h1", High),
            clue("h2", High),
            clue("h3", High),
            clue("m1", Medium),
            clue("l1", Low),
            clue("l2", Low),
            clue("l3", Low),
        ];
        let lineup = Lineup::from(pool.as_slice());
        let texts = lineup
            .clues()
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>();
        // h1 + m1 + l1 l2 leaves one slot, filled by the next unused High
        assert!(texts == vec!["h1", "m1", "l1", "l2", "h2"]);
    }

    #[test]
    fn single_clue_pool() {
        let pool = vec![clue("only", Reliability::Low)];
        let lineup = Lineup::from(pool.as_slice());
        assert!(lineup.len() == 1);
        assert!(lineup.clues()[0].text == "only");
    }

    #[test]
    fn oversized_pool_caps_at_five() {
        let pool = (0..12)
            .map(|i| clue(&format!("m{}", i), Reliability::Medium))
            .collect::<Vec<_>>();
        let lineup = Lineup::from(pool.as_slice());
        assert!(lineup.len() == MAX_CLUES);
        let texts = lineup
            .clues()
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>();
        assert!(texts == vec!["m0", "m1", "m2", "m3", "m4"]);
    }

    #[test]
    fn deterministic_given_pool_order() {
        use Reliability::*;
        let pool = vec![
            clue("h1", High),
            clue("m1", Medium),
            clue("m2", Medium),
            clue("l1", Low),
            clue("l2", Low),
        ];
        let a = Lineup::from(pool.as_slice());
        let b = Lineup::from(pool.as_slice());
        assert!(a.clues() == b.clues());
    }
}
