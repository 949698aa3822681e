//! Static card vocabulary.
//!
//! Raw keys follow the spelling used by the MTGJSON card dump. Single-column
//! tables map each raw key to its lowercase form; paired tables spell the
//! canonical member out.

use super::stop_words::STOP_WORDS;

/// The fixed domain knowledge an `AttributeCatalog` is built from.
#[derive(Clone, Copy, Debug)]
pub struct Vocabulary {
    pub types: &'static [&'static str],
    pub subtypes: &'static [&'static str],
    pub supertypes: &'static [&'static str],
    pub layouts: &'static [&'static str],
    pub colors: &'static [(&'static str, &'static str)],
    pub mana_symbols: &'static [(&'static str, &'static str)],
    pub keyword_abilities: &'static [&'static str],
    pub keyword_actions: &'static [&'static str],
    pub stop_words: &'static [&'static str],
}

impl Vocabulary {
    /// No entries in any table.
    pub const EMPTY: Vocabulary = Vocabulary {
        types: &[],
        subtypes: &[],
        supertypes: &[],
        layouts: &[],
        colors: &[],
        mana_symbols: &[],
        keyword_abilities: &[],
        keyword_actions: &[],
        stop_words: &[],
    };

    /// The process-wide standard vocabulary.
    #[must_use]
    pub fn standard() -> &'static Vocabulary {
        &STANDARD
    }
}

static STANDARD: Vocabulary = Vocabulary {
    types: TYPES,
    subtypes: SUBTYPES,
    supertypes: SUPERTYPES,
    layouts: LAYOUTS,
    colors: COLORS,
    mana_symbols: MANA_SYMBOLS,
    keyword_abilities: KEYWORD_ABILITIES,
    keyword_actions: KEYWORD_ACTIONS,
    stop_words: STOP_WORDS,
};

const TYPES: &[&str] = &[
    "Artifact", "Battle", "Conspiracy", "Creature", "Dungeon", "Enchantment", "Instant",
    "Kindred", "Land", "Phenomenon", "Plane", "Planeswalker", "Scheme", "Sorcery", "Tribal",
    "Vanguard",
];

const SUPERTYPES: &[&str] = &["Basic", "Elite", "Host", "Legendary", "Ongoing", "Snow", "World"];

const LAYOUTS: &[&str] = &[
    "normal", "split", "flip", "double-faced", "transform", "modal_dfc", "token", "plane",
    "planar", "scheme", "phenomenon", "leveler", "vanguard", "meld", "aftermath", "saga",
    "class", "case", "adventure", "host", "augment", "emblem", "mutate", "prototype",
    "reversible_card", "art_series", "double_faced_token",
];

const COLORS: &[(&str, &str)] = &[
    ("White", "white"),
    ("Blue", "blue"),
    ("Black", "black"),
    ("Red", "red"),
    ("Green", "green"),
    ("W", "white"),
    ("U", "blue"),
    ("B", "black"),
    ("R", "red"),
    ("G", "green"),
];

const MANA_SYMBOLS: &[(&str, &str)] = &[
    ("W", "white"),
    ("U", "blue"),
    ("B", "black"),
    ("R", "red"),
    ("G", "green"),
    ("C", "colorless"),
    ("S", "snow"),
    ("X", "x"),
    ("Y", "y"),
    ("Z", "z"),
    ("0", "generic"),
    ("1", "generic"),
    ("2", "generic"),
    ("3", "generic"),
    ("4", "generic"),
    ("5", "generic"),
    ("6", "generic"),
    ("7", "generic"),
    ("8", "generic"),
    ("9", "generic"),
    ("10", "generic"),
    ("11", "generic"),
    ("12", "generic"),
    ("13", "generic"),
    ("14", "generic"),
    ("15", "generic"),
    ("16", "generic"),
    ("17", "generic"),
    ("18", "generic"),
    ("19", "generic"),
    ("20", "generic"),
    ("100", "generic"),
    ("1000000", "generic"),
    ("½", "generic"),
    ("HW", "half white"),
    ("HR", "half red"),
    ("W/U", "white/blue"),
    ("W/B", "white/black"),
    ("U/B", "blue/black"),
    ("U/R", "blue/red"),
    ("B/R", "black/red"),
    ("B/G", "black/green"),
    ("R/G", "red/green"),
    ("R/W", "red/white"),
    ("G/W", "green/white"),
    ("G/U", "green/blue"),
    ("C/W", "colorless/white"),
    ("C/U", "colorless/blue"),
    ("C/B", "colorless/black"),
    ("C/R", "colorless/red"),
    ("C/G", "colorless/green"),
    ("2/W", "two/white"),
    ("2/U", "two/blue"),
    ("2/B", "two/black"),
    ("2/R", "two/red"),
    ("2/G", "two/green"),
    ("W/P", "phyrexian white"),
    ("U/P", "phyrexian blue"),
    ("B/P", "phyrexian black"),
    ("R/P", "phyrexian red"),
    ("G/P", "phyrexian green"),
    ("P", "phyrexian"),
    ("W/U/P", "phyrexian white/blue"),
    ("W/B/P", "phyrexian white/black"),
    ("U/B/P", "phyrexian blue/black"),
    ("U/R/P", "phyrexian blue/red"),
    ("B/R/P", "phyrexian black/red"),
    ("B/G/P", "phyrexian black/green"),
    ("R/G/P", "phyrexian red/green"),
    ("R/W/P", "phyrexian red/white"),
    ("G/W/P", "phyrexian green/white"),
    ("G/U/P", "phyrexian green/blue"),
];

const KEYWORD_ABILITIES: &[&str] = &[
    "absorb", "affinity", "afflict", "afterlife", "aftermath", "amplify", "annihilator",
    "ascend", "assist", "aura swap", "awaken", "backup", "banding", "bargain", "battle cry",
    "bestow", "blitz", "bloodthirst", "boast", "bushido", "buyback", "cascade", "casualty",
    "champion", "changeling", "cipher", "cleave", "companion", "compleated", "conspire",
    "convoke", "craft", "crew", "cumulative upkeep", "cycling", "dash", "daybound",
    "deathtouch", "decayed", "defender", "delve", "demonstrate", "dethrone", "devoid",
    "devour", "disguise", "disturb", "double strike", "dredge", "echo", "embalm", "emerge",
    "enchant", "encore", "enlist", "entwine", "epic", "equip", "escalate", "escape",
    "eternalize", "evoke", "evolve", "exalted", "exploit", "extort", "fabricate", "fading",
    "fear", "first strike", "flanking", "flash", "flashback", "flying", "forecast",
    "foretell", "fortify", "frenzy", "fuse", "graft", "gravestorm", "haste", "haunt",
    "hexproof", "hidden agenda", "hideaway", "horsemanship", "improvise", "indestructible",
    "infect", "ingest", "intimidate", "jump-start", "kicker", "landwalk", "level up",
    "lifelink", "living weapon", "madness", "melee", "menace", "mentor", "miracle",
    "modular", "morph", "mutate", "myriad", "nightbound", "ninjutsu", "offering", "outlast",
    "overload", "partner", "persist", "phasing", "poisonous", "protection", "provoke",
    "prowess", "prowl", "rampage", "ravenous", "reach", "read ahead", "rebound",
    "reconfigure", "recover", "reinforce", "renown", "replicate", "retrace", "riot",
    "ripple", "scavenge", "shadow", "shroud", "skulk", "soulbond", "soulshift",
    "spectacle", "splice", "split second", "squad", "storm", "sunburst", "surge", "suspend",
    "totem armor", "toxic", "training", "trample", "transfigure", "transmute", "tribute",
    "undaunted", "undying", "unearth", "unleash", "vanishing", "vigilance", "ward",
    "wither",
];

const KEYWORD_ACTIONS: &[&str] = &[
    "abandon", "activate", "adapt", "amass", "assemble", "attach", "bolster", "cast",
    "clash", "connive", "counter", "create", "destroy", "detain", "discard", "discover",
    "double", "exchange", "exert", "exile", "explore", "fateseal", "fight", "goad",
    "incubate", "investigate", "learn", "manifest", "meld", "mill", "monstrosity", "planeswalk",
    "play", "populate", "proliferate", "regenerate", "reveal", "sacrifice", "scry", "search",
    "seek", "set in motion", "shuffle", "support", "surveil", "tap", "transform", "untap",
    "venture", "vote",
];

const SUBTYPES: &[&str] = &[
    // artifact
    "Attraction", "Blood", "Clue", "Contraption", "Equipment", "Food", "Fortification",
    "Gold", "Treasure", "Vehicle",
    // enchantment
    "Aura", "Cartouche", "Class", "Curse", "Rune", "Saga", "Shard", "Shrine",
    // land
    "Desert", "Forest", "Gate", "Island", "Lair", "Locus", "Mine", "Mountain", "Plains",
    "Power-Plant", "Swamp", "Tower", "Urza's",
    // planeswalker
    "Ajani", "Aminatou", "Angrath", "Arlinn", "Ashiok", "Bolas", "Calix", "Chandra", "Dack",
    "Daretti", "Davriel", "Domri", "Dovin", "Elspeth", "Estrid", "Freyalise", "Garruk",
    "Gideon", "Grist", "Huatli", "Jace", "Jaya", "Jeska", "Kaito", "Karn", "Kasmina", "Kaya",
    "Kiora", "Koth", "Liliana", "Lolth", "Lukka", "Nahiri", "Narset", "Niko", "Nissa",
    "Nixilis", "Oko", "Ral", "Rowan", "Saheeli", "Samut", "Sarkhan", "Serra", "Sorin",
    "Szat", "Tamiyo", "Teferi", "Teyo", "Tezzeret", "Tibalt", "Tyvar", "Ugin", "Venser",
    "Vivien", "Vraska", "Will", "Windgrace", "Wrenn", "Xenagos", "Yanggu", "Yanling",
    // instant / sorcery
    "Adventure", "Arcane", "Lesson", "Trap",
    // creature
    "Advisor", "Aetherborn", "Ally", "Angel", "Antelope", "Ape", "Archer", "Archon",
    "Army", "Artificer", "Assassin", "Assembly-Worker", "Atog", "Aurochs", "Avatar",
    "Azra", "Badger", "Barbarian", "Basilisk", "Bat", "Bear", "Beast", "Beeble",
    "Berserker", "Bird", "Blinkmoth", "Boar", "Bringer", "Brushwagg", "Camarid", "Camel",
    "Caribou", "Carrier", "Cat", "Centaur", "Cephalid", "Chimera", "Citizen", "Cleric",
    "Cockatrice", "Construct", "Coward", "Crab", "Crocodile", "Cyclops", "Dauthi", "Demon",
    "Deserter", "Devil", "Dinosaur", "Djinn", "Dragon", "Drake", "Dreadnought", "Drone",
    "Druid", "Dryad", "Dwarf", "Efreet", "Egg", "Elder", "Eldrazi", "Elemental", "Elephant",
    "Elf", "Elk", "Eye", "Faerie", "Ferret", "Fish", "Flagbearer", "Fox", "Frog", "Fungus",
    "Gargoyle", "Germ", "Giant", "Gnome", "Goat", "Goblin", "God", "Golem", "Gorgon",
    "Graveborn", "Gremlin", "Griffin", "Hag", "Harpy", "Hellion", "Hippo", "Hippogriff",
    "Homarid", "Homunculus", "Horror", "Horse", "Hound", "Human", "Hydra", "Hyena",
    "Illusion", "Imp", "Incarnation", "Insect", "Jellyfish", "Juggernaut", "Kavu", "Kirin",
    "Kithkin", "Knight", "Kobold", "Kor", "Kraken", "Lamia", "Lammasu", "Leech", "Leviathan",
    "Lhurgoyf", "Licid", "Lizard", "Manticore", "Masticore", "Mercenary", "Merfolk",
    "Metathran", "Minion", "Minotaur", "Mole", "Monger", "Mongoose", "Monk", "Monkey",
    "Moonfolk", "Mutant", "Myr", "Mystic", "Naga", "Nautilus", "Nephilim", "Nightmare",
    "Nightstalker", "Ninja", "Noggle", "Nomad", "Nymph", "Octopus", "Ogre", "Ooze", "Orb",
    "Orc", "Orgg", "Ouphe", "Ox", "Oyster", "Pegasus", "Pentavite", "Pest", "Phelddagrif",
    "Phoenix", "Pilot", "Pincher", "Pirate", "Plant", "Praetor", "Prism", "Processor",
    "Rabbit", "Rat", "Rebel", "Reflection", "Rhino", "Rigger", "Rogue", "Sable",
    "Salamander", "Samurai", "Sand", "Saproling", "Satyr", "Scarecrow", "Scion", "Scorpion",
    "Scout", "Serf", "Serpent", "Servo", "Shade", "Shaman", "Shapeshifter", "Sheep", "Siren",
    "Skeleton", "Slith", "Sliver", "Slug", "Snake", "Soldier", "Soltari", "Spawn", "Specter",
    "Spellshaper", "Sphinx", "Spider", "Spike", "Spirit", "Splinter", "Sponge", "Squid",
    "Squirrel", "Starfish", "Surrakar", "Survivor", "Tetravite", "Thalakos", "Thopter",
    "Thrull", "Treefolk", "Triskelavite", "Troll", "Turtle", "Unicorn", "Vampire",
    "Vedalken", "Viashino", "Volver", "Wall", "Warrior", "Weird", "Werewolf", "Whale",
    "Wizard", "Wolf", "Wolverine", "Wombat", "Worm", "Wraith", "Wurm", "Yeti", "Zombie",
    "Zubera",
    // plane
    "Alara", "Arkhos", "Azgol", "Belenon", "Bolas's Meditation Realm", "Dominaria",
    "Equilor", "Ergamon", "Fabacin", "Innistrad", "Iquatana", "Ir", "Kaldheim", "Kamigawa",
    "Karsus", "Kephalai", "Kinshala", "Kolbahan", "Kyneth", "Lorwyn", "Luvion", "Mercadia",
    "Mirrodin", "Moag", "Mongseng", "Muraganda", "New Phyrexia", "Phyrexia", "Pyrulea",
    "Rabiah", "Rath", "Ravnica", "Regatha", "Segovia", "Serra's Realm", "Shadowmoor",
    "Shandalar", "Ulgrotha", "Valla", "Vryn", "Wildfire", "Xerex", "Zendikar",
];
