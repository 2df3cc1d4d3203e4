//! Hobby content catalog
//!
//! Static mapping from hobby name to an icon and a fixed pool of challenge texts.
//! Daily sets are drawn from these pools.

/// Icon used for hobbies that are not in the catalog
pub const FALLBACK_ICON: &str = "✨";

/// Challenge text used for hobbies that are not in the catalog
pub const FALLBACK_CHALLENGE: &str = "Try something new!";

/// One hobby and its challenge pool
#[derive(Debug, Clone)]
pub struct Hobby {
    pub name: &'static str,
    pub icon: &'static str,
    pub challenges: &'static [&'static str],
}

/// All hobbies offered during profile setup (order is display order)
pub static HOBBIES: &[Hobby] = &[
    Hobby {
        name: "Art",
        icon: "🎨",
        challenges: &[
            "Create a self-portrait using only three colors",
            "Draw your favorite place using only lines, no shading",
            "Make a collage representing your current mood",
            "Paint a mini landscape with your fingers",
            "Sketch 10 different facial expressions in 20 minutes",
            "Create abstract art inspired by your favorite song",
        ],
    },
    Hobby {
        name: "Guitar",
        icon: "🎸",
        challenges: &[
            "Learn and record a 30-second riff from your favorite song",
            "Practice chord transitions for 20 minutes",
            "Write a simple 4-chord progression and record it",
            "Learn to play 'Happy Birthday' in 3 keys",
            "Practice fingerpicking for 15 minutes",
            "Record yourself improvising over a backing track",
        ],
    },
    Hobby {
        name: "Piano",
        icon: "🎹",
        challenges: &[
            "Learn the first 8 bars of 'Für Elise'",
            "Practice C major scale 10× with correct fingering",
            "Learn a simple version of 'Let It Be'",
            "Compose and record an 8-bar melody",
            "Play 'Twinkle Twinkle' in different octaves",
            "Learn basic jazz chords: Cmaj7, Dm7, G7",
        ],
    },
    Hobby {
        name: "Coding",
        icon: "💻",
        challenges: &[
            "Build a simple calculator using HTML/CSS/JS",
            "Create a random quote generator",
            "Make a to-do list with add/remove",
            "Build a color palette generator",
            "Make a countdown timer for an event",
            "Solve one coding challenge online",
        ],
    },
    Hobby {
        name: "Skating",
        icon: "🛹",
        challenges: &[
            "Practice ollies: land 10 clean ones in a row",
            "Ride switch stance for 5 minutes straight",
            "Master kickturns both sides",
            "Balance on your board for 60s",
            "Practice pumping to gain speed",
            "Film yourself doing your best trick",
        ],
    },
    Hobby {
        name: "Crochet",
        icon: "🧶",
        challenges: &[
            "Make a granny square",
            "Create a basic dishcloth using single crochet",
            "Learn double crochet and make a 6-inch swatch",
            "Make a fringe bookmark",
            "Create 5 small flowers",
            "Start a small scarf (10+ rows)",
        ],
    },
    Hobby {
        name: "Sewing",
        icon: "✂️",
        challenges: &[
            "Sew a tote bag (simple straight seams)",
            "Make fabric coasters",
            "Practice different hand stitches on scraps",
            "Create a pillowcase with French seams",
            "Make bookmarks with ribbons",
            "Add patches/appliques to a garment",
        ],
    },
    Hobby {
        name: "Cooking",
        icon: "👩‍🍳",
        challenges: &[
            "Try a recipe from a new cuisine",
            "Bake bread from scratch (any type)",
            "Create a dish using only what you have",
            "Make pasta from scratch",
            "Try a new technique (braising, grilling)",
            "Make a meal with 5+ veg",
        ],
    },
];

/// Stand-in for hobby names the catalog does not know
static FALLBACK: Hobby = Hobby {
    name: "",
    icon: FALLBACK_ICON,
    challenges: &[FALLBACK_CHALLENGE],
};

impl Hobby {
    /// Look up a hobby by exact name
    pub fn get(name: &str) -> Option<&'static Hobby> {
        HOBBIES.iter().find(|h| h.name == name)
    }

    /// Look up a hobby, degrading to the fallback icon and challenge for unknown names
    pub fn get_or_fallback(name: &str) -> &'static Hobby {
        Self::get(name).unwrap_or(&FALLBACK)
    }

    /// Names of every catalog hobby, in catalog order
    pub fn names() -> Vec<String> {
        HOBBIES.iter().map(|h| h.name.to_string()).collect()
    }

    /// Whether the name refers to a catalog hobby
    pub fn is_known(name: &str) -> bool {
        Self::get(name).is_some()
    }
}
