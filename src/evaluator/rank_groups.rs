use crate::cards::Rank;

/// Ranks of a five-card hand grouped by how often they occur, sorted by
/// (count desc, rank desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    pub fn from_ranks(ranks: &[Rank]) -> Self {
        let mut counts = [0u8; 15];
        for r in ranks {
            counts[r.value() as usize] += 1;
        }
        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .map(|&r| (r, counts[r.value() as usize]))
            .filter(|(_, c)| *c > 0)
            .collect();
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
        Self { groups }
    }

    /// Number of distinct ranks that occur exactly `n` times.
    pub fn ranks_with_count(&self, n: u8) -> usize {
        self.groups.iter().filter(|(_, c)| *c == n).count()
    }

    pub fn has_count(&self, n: u8) -> bool {
        self.ranks_with_count(n) > 0
    }

    pub fn quad(&self) -> Option<Rank> {
        self.of_count(4).next()
    }

    pub fn trips(&self) -> Option<Rank> {
        self.of_count(3).next()
    }

    /// Pair ranks, highest first.
    pub fn pairs(&self) -> Vec<Rank> {
        self.of_count(2).collect()
    }

    /// Unpaired ranks, highest first.
    pub fn kickers(&self) -> Vec<Rank> {
        self.of_count(1).collect()
    }

    fn of_count(&self, n: u8) -> impl Iterator<Item = Rank> + '_ {
        self.groups.iter().filter(move |(_, c)| *c == n).map(|(r, _)| *r)
    }
}
