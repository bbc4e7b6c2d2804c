//! Static subject → focus-area table with rotating lookup.
//!
//! Each known subject maps to an ordered, non-empty list of focus topics.
//! Unknown subjects fall back to the general "Science" entry, so lookup is
//! total and never fails.

/// Subject used as the fallback entry for unknown subjects.
pub const FALLBACK_SUBJECT: &str = "Science";

/// Focus areas for a subject, falling back to the general science list.
///
/// Every returned slice is non-empty.
pub fn focus_areas(subject: &str) -> &'static [&'static str] {
    match subject {
        "Mathematics" => &[
            "Algebra fundamentals",
            "Geometry concepts",
            "Calculus practice",
            "Problem-solving drills",
            "Review formulas",
        ],
        "Physics" => &[
            "Mechanics principles",
            "Thermodynamics",
            "Electromagnetism",
            "Wave motion",
            "Quantum basics",
        ],
        "Chemistry" => &[
            "Atomic structure",
            "Bonding theory",
            "Stoichiometry",
            "Reactions",
            "Organic synthesis",
        ],
        "Biology" => &[
            "Cell biology",
            "Genetics",
            "Evolution",
            "Ecology",
            "Human anatomy",
        ],
        "English" => &[
            "Literature analysis",
            "Grammar rules",
            "Essay writing",
            "Vocabulary building",
            "Reading comprehension",
        ],
        "History" => &[
            "Timeline events",
            "Historical analysis",
            "Key figures",
            "Cause and effect",
            "Primary sources",
        ],
        "Computer Science" => &[
            "Programming concepts",
            "Data structures",
            "Algorithms",
            "System design",
            "Debug exercises",
        ],
        "Economics" => &[
            "Microeconomics",
            "Macroeconomics",
            "Market analysis",
            "Policy implications",
            "Case studies",
        ],
        "Literature" => &[
            "Text analysis",
            "Themes exploration",
            "Character development",
            "Writing style",
            "Comparative study",
        ],
        // "Science" and anything unrecognized share the general list.
        _ => &[
            "Experimental methods",
            "Data analysis",
            "Lab techniques",
            "Scientific reasoning",
            "Review concepts",
        ],
    }
}

/// Rotating focus area for a subject on a given 1-based plan day.
///
/// Rotation is periodic with the length of the subject's focus list.
pub fn subject_focus(subject: &str, day_number: u32) -> &'static str {
    let areas = focus_areas(subject);
    areas[(day_number as usize - 1) % areas.len()]
}
