use serde::Deserialize;

use crate::error::LeaderboardError;

/// How many entries the leaderboard view shows.
pub const LEADERBOARD_LIMIT: usize = 10;

/// One finished quiz, in the shape the score store keeps it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
    pub total: u32,
    /// Submission time, epoch milliseconds.
    pub timestamp: u64,
}

impl LeaderboardEntry {
    /// Score as a whole-number percentage of `total`.
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (f64::from(self.score) * 100.0 / f64::from(self.total)).round() as u32
    }
}

/// Append-only collection of quiz results.
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Decode a snapshot: a JSON array of entry documents.
    pub fn from_json(text: &str) -> Result<Self, LeaderboardError> {
        let entries: Vec<LeaderboardEntry> = serde_json::from_str(text)?;
        log::debug!("Leaderboard snapshot with {} entries", entries.len());
        Ok(Leaderboard { entries })
    }

    /// Record a result. The name is trimmed and must not be blank.
    pub fn submit(
        &mut self,
        name: &str,
        score: u32,
        total: u32,
        timestamp: u64,
    ) -> Result<&LeaderboardEntry, LeaderboardError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LeaderboardError::EmptyName);
        }
        log::debug!("Leaderboard: {name} scored {score}/{total}");
        self.entries.push(LeaderboardEntry {
            name: name.to_string(),
            score,
            total,
            timestamp,
        });
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Best `limit` entries: highest score first, earlier submission
    /// breaking ties.
    pub fn top(&self, limit: usize) -> Vec<&LeaderboardEntry> {
        let mut ranked: Vec<&LeaderboardEntry> = self.entries.iter().collect();
        ranked.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.timestamp.cmp(&b.timestamp))
        });
        ranked.truncate(limit);
        ranked
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_by_score_then_earliest() {
        let mut board = Leaderboard::default();
        board.submit("late", 7, 8, 300).unwrap();
        board.submit("low", 3, 8, 100).unwrap();
        board.submit("early", 7, 8, 200).unwrap();
        board.submit("best", 8, 8, 400).unwrap();

        let names: Vec<&str> = board
            .top(LEADERBOARD_LIMIT)
            .into_iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["best", "early", "late", "low"]);
    }

    #[test]
    fn top_is_limited() {
        let mut board = Leaderboard::default();
        for i in 0..15u32 {
            board.submit(&format!("p{i}"), i % 9, 8, u64::from(i)).unwrap();
        }
        let top = board.top(LEADERBOARD_LIMIT);
        assert_eq!(top.len(), 10);
        assert_eq!(board.len(), 15);
        assert!(top.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn names_are_trimmed_and_required() {
        let mut board = Leaderboard::default();
        assert!(matches!(
            board.submit("   ", 1, 8, 0),
            Err(LeaderboardError::EmptyName)
        ));
        assert_eq!(board.submit("  Ada ", 1, 8, 0).unwrap().name, "Ada");
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn percentage_rounds_and_handles_empty_quiz() {
        let mut board = Leaderboard::default();
        assert_eq!(board.submit("a", 5, 8, 0).unwrap().percentage(), 63);
        assert_eq!(board.submit("b", 8, 8, 0).unwrap().percentage(), 100);
        assert_eq!(board.submit("c", 0, 0, 0).unwrap().percentage(), 0);
    }

    #[test]
    fn snapshot_documents_decode() {
        let board = Leaderboard::from_json(
            r#"[{"name":"Ada","score":6,"total":8,"timestamp":1700000000000},
                {"name":"Bo","score":8,"total":8,"timestamp":1700000000500}]"#,
        )
        .unwrap();
        assert_eq!(board.top(1)[0].name, "Bo");
        assert!(Leaderboard::from_json("{}").is_err());
    }
}
