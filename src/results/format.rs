use crate::models::ResultSnapshot;
use lazy_static::lazy_static;
use std::collections::HashMap;

const HEADER: &str = "#KenyaDecides UPDATE";
const CANDIDATES_SHOWN: usize = 2;

lazy_static! {
    /// Ballot names to tweet-sized display names.
    pub static ref SHORT_NAMES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("UHURU KENYATTA", "KENYATTA (JP)");
        m.insert("RAILA ODINGA", "ODINGA (ODM)");
        m.insert("JOSEPH WILLIAM NTHIGA NYAGAH", "Nyagah (IND)");
        m.insert("JOHN EKURU LONGOGGY AUKOT", "Aukot (TAK)");
        m.insert("MOHAMED ABDUBA DIDA", "Dida (ARK)");
        // The feed spells this one with two spaces.
        m.insert("JAPHETH  KAVINGA KALUYU", "Kaluyu (IND)");
        m.insert("SHAKHALAGA KHWA JIRONGO", "Jirongo (UDP)");
        m.insert("MICHAEL WAINAINA MWAURA", "Mwaura (IND)");
        m
    };
}

/// Unmapped names render as an empty string.
pub fn short_name(full_name: &str) -> &'static str {
    SHORT_NAMES.get(full_name).copied().unwrap_or("")
}

pub fn render(snapshot: &ResultSnapshot) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push_str("\n\n");

    for party in snapshot.results.parties.iter().take(CANDIDATES_SHOWN) {
        out.push_str(&format!(
            "{} {} ({:.2}%)\n",
            short_name(&party.name),
            party.votes.total(),
            party.votes.percent
        ));
    }

    out.push_str(&format!("\nValid votes: {}\n", snapshot.results.blank));
    out.push_str(&format!(
        "Stations: {} / {}\n",
        snapshot.progress.processed, snapshot.progress.total
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Party, PartyVotes, Progress, Results};

    fn party(name: &str, votes: PartyVotes) -> Party {
        Party {
            name: name.to_string(),
            votes,
            ..Default::default()
        }
    }

    #[test]
    fn test_render_exact_template() {
        let snapshot = ResultSnapshot {
            progress: Progress {
                processed: 30123,
                total: 40883,
            },
            results: Results {
                parties: vec![
                    party(
                        "UHURU KENYATTA",
                        PartyVotes {
                            presential: 7_000_000,
                            absentee: 1_000,
                            international: 200,
                            special: 30,
                            percent: 54.271,
                        },
                    ),
                    party(
                        "SOMEONE NOT ON THE LIST",
                        PartyVotes {
                            presential: 5_000_000,
                            absentee: 500,
                            international: 0,
                            special: 4,
                            percent: 44.5,
                        },
                    ),
                    party(
                        "RAILA ODINGA",
                        PartyVotes {
                            presential: 1,
                            percent: 0.01,
                            ..Default::default()
                        },
                    ),
                ],
                blank: 81234,
                ..Default::default()
            },
            ..Default::default()
        };

        let expected = "#KenyaDecides UPDATE\n\
                        \n\
                        KENYATTA (JP) 7001230 (54.27%)\n \
                        5000504 (44.50%)\n\
                        \n\
                        Valid votes: 81234\n\
                        Stations: 30123 / 40883\n";
        assert_eq!(render(&snapshot), expected);
    }

    #[test]
    fn test_render_is_deterministic() {
        let snapshot = ResultSnapshot {
            results: Results {
                parties: vec![
                    party("RAILA ODINGA", PartyVotes::default()),
                    party("MOHAMED ABDUBA DIDA", PartyVotes::default()),
                ],
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(render(&snapshot), render(&snapshot));
        assert!(render(&snapshot).contains("ODINGA (ODM) 0 (0.00%)\nDida (ARK) 0 (0.00%)\n"));
    }

    #[test]
    fn test_short_name_lookup() {
        assert_eq!(short_name("JAPHETH  KAVINGA KALUYU"), "Kaluyu (IND)");
        assert_eq!(short_name("JAPHETH KAVINGA KALUYU"), "");
        assert_eq!(SHORT_NAMES.len(), 8);
    }

    #[test]
    fn test_render_survives_huge_counts() {
        let payload = br#"{"results":{"parties":[{"votes":{"presential":9223372036854775807,"special":1}},{}]},"timestamp":1502294400000}"#;
        let parsed = crate::results::parse(payload).unwrap();
        let text = render(&parsed.snapshot);
        assert!(text.contains(" -9223372036854775808 (0.00%)\n"));
    }
}
