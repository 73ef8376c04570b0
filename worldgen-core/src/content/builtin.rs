//! Word lists shipped with the service.

use crate::world::{Climate, Theme};

pub(super) const FEATURES: &[(Climate, &[&str])] = &[
    (
        Climate::Arid,
        &[
            "Sand dunes",
            "Isolated oases",
            "Cracked earth",
            "Salt flats",
            "Dust storms",
            "Canyons",
            "Mesas",
            "Rock formations",
            "Stone arches",
            "Desert blooms",
        ],
    ),
    (
        Climate::Temperate,
        &[
            "Conifer forests",
            "Green fields",
            "Rolling hills",
            "Rain showers",
            "Wildflowers",
            "Deciduous forests",
            "Rivers",
            "Lakes",
            "Meadows",
            "Vales",
        ],
    ),
    (
        Climate::Tropical,
        &[
            "Dense forests",
            "Paradise islands",
            "Steamy jungles",
            "Monsoon storms",
            "Coral reefs",
            "Mangrove swamps",
            "Waterfalls",
            "Volcanic islands",
            "Pristine beaches",
            "Hidden caverns",
        ],
    ),
    (
        Climate::Arctic,
        &[
            "Ice fields",
            "Snow-covered mountains",
            "Glacial caves",
            "Aurora borealis",
            "Permafrost plains",
            "Ice floes",
            "Frozen waterfalls",
            "Snow drifts",
            "Frozen lakes",
            "Hot springs",
        ],
    ),
    (
        Climate::Mediterranean,
        &[
            "Vineyards",
            "Century-old olive trees",
            "Sun-drenched coasts",
            "Herb-scented breezes",
            "Terraced hillsides",
            "Rocky coves",
            "Azure waters",
            "Cypress trees",
            "Stone villages",
            "Coastal cliffs",
        ],
    ),
    (
        Climate::Alpine,
        &[
            "Rugged peaks",
            "Flower meadows",
            "Evergreen forests",
            "Mountain lakes",
            "Glacier streams",
            "Rock slides",
            "Mountain passes",
            "Fog banks",
            "Stone cabins",
            "Avalanche paths",
        ],
    ),
    (
        Climate::Oceanic,
        &[
            "Misty hillsides",
            "Green valleys",
            "Moss-covered stones",
            "Frequent showers",
            "Hedgerows",
            "Thatched cottages",
            "Windswept coasts",
            "Foggy mornings",
            "Peat bogs",
            "Heather fields",
        ],
    ),
    (
        Climate::Continental,
        &[
            "Great plains",
            "Rich farmland",
            "Seasonal forests",
            "Summer storms",
            "River networks",
            "Grasslands",
            "Four distinct seasons",
            "Flood plains",
            "Limestone caves",
            "Ponds",
        ],
    ),
    (
        Climate::Monsoonal,
        &[
            "Rice terraces",
            "Bamboo groves",
            "Seasonal flooding",
            "Dense fogs",
            "Orchid forests",
            "Tea plantations",
            "Stepped terrain",
            "Summer rains",
            "Mist-shrouded mountains",
            "Water gardens",
        ],
    ),
    (
        Climate::Polar,
        &[
            "Ice sheets",
            "Frozen seas",
            "Midnight sun",
            "Polar night",
            "Icebergs",
            "Frozen mountains",
            "Ice caves",
            "Snow plains",
            "Crystal forests",
            "Shimmering lights",
        ],
    ),
    (
        Climate::Desert,
        &[
            "Cacti forests",
            "Rock pillars",
            "Dry riverbeds",
            "Shifting sands",
            "Mirages",
            "Ancient meteorite craters",
            "Sand valleys",
            "Fossil beds",
            "Obsidian fields",
            "Hidden springs",
        ],
    ),
    (
        Climate::Savanna,
        &[
            "Tall grasses",
            "Acacia trees",
            "Seasonal wetlands",
            "Termite mounds",
            "Baobab trees",
            "Watering holes",
            "Red soil",
            "Flat-topped mountains",
            "Valley systems",
            "Seasonal burns",
        ],
    ),
    (
        Climate::Rainforest,
        &[
            "Emergent canopies",
            "Lianas",
            "Medicinal plants",
            "Mist curtains",
            "Forest floor",
            "Huge buttress roots",
            "Colorful birds",
            "Singing insects",
            "Epiphytic gardens",
            "Mossy banks",
        ],
    ),
    (
        Climate::Tundra,
        &[
            "Lichen fields",
            "Dwarf shrubs",
            "Caribou moss",
            "Shallow lakes",
            "Hardy flowers",
            "Ice wedge polygons",
            "Stone circles",
            "Peat mounds",
            "Meltwater streams",
            "Bare ridges",
        ],
    ),
    (
        Climate::HumidSubtropical,
        &[
            "Spanish moss",
            "Swamp cypress",
            "Brick-red soil",
            "Magnolia trees",
            "Summer thunderstorms",
            "Azalea gardens",
            "Year-round greenery",
            "Morning mist",
            "Firefly fields",
            "Warm lagoons",
        ],
    ),
];

pub(super) const FAUNA: &[(Theme, &[(Climate, &[&str])])] = &[
    (
        Theme::Fantasy,
        &[
            (
                Climate::Arid,
                &[
                    "Sand drakes",
                    "Dust sprites",
                    "Mirage phoenixes",
                    "Heat salamanders",
                    "Crystal scorpions",
                ],
            ),
            (
                Climate::Temperate,
                &[
                    "Talking deer",
                    "Sprite foxes",
                    "Luminous rabbits",
                    "Healing doves",
                    "Enchanted wolves",
                ],
            ),
            (
                Climate::Tropical,
                &[
                    "Rainbow serpents",
                    "Jeweled macaws",
                    "Glow frogs",
                    "Giant butterflies",
                    "Fae panthers",
                ],
            ),
            (
                Climate::Arctic,
                &[
                    "Frost giants",
                    "Ice wyverns",
                    "Snow sphinxes",
                    "Boreal phoenixes",
                    "Glacial bears",
                ],
            ),
            (
                Climate::Mediterranean,
                &[
                    "Oracle octopi",
                    "Sea nymphs",
                    "Sphinx lions",
                    "Wine-loving fauns",
                    "Sage owls",
                ],
            ),
        ],
    ),
    (
        Theme::SciFi,
        &[
            (
                Climate::Arid,
                &[
                    "Silicon-based crawlers",
                    "Photosynthetic predators",
                    "Sand-phase organisms",
                    "Heat-energy beings",
                    "Metal-eating insects",
                ],
            ),
            (
                Climate::Temperate,
                &[
                    "Biomechanical deer",
                    "Engineered canines",
                    "Surveillance birds",
                    "Camouflage symbiotes",
                    "Pollen-collecting drones",
                ],
            ),
            (
                Climate::Tropical,
                &[
                    "Genetically-enhanced primates",
                    "Bio-luminescent birds",
                    "Engineered amphibians",
                    "Data-collecting insects",
                    "Hyper-evolved felines",
                ],
            ),
            (
                Climate::Arctic,
                &[
                    "Cryo-adapted lifeforms",
                    "Thermal parasites",
                    "Ice-boring worms",
                    "Magnetic field sensors",
                    "Thermophilic microbes",
                ],
            ),
            (
                Climate::Mediterranean,
                &[
                    "Aquatic data collectors",
                    "Water purifier organisms",
                    "Coastal reconnaissance drones",
                    "Energy-harvesting fish",
                    "Terraforming coral",
                ],
            ),
        ],
    ),
    (
        Theme::PostApocalyptic,
        &[
            (
                Climate::Arid,
                &[
                    "Radiation-resistant lizards",
                    "Mutated scorpions",
                    "Sand piranhas",
                    "Toxic hornets",
                    "Dust wolves",
                ],
            ),
            (
                Climate::Temperate,
                &[
                    "Three-eyed deer",
                    "Acid rain frogs",
                    "Oversized insects",
                    "Scavenger dogs",
                    "Pack rats",
                ],
            ),
            (
                Climate::Tropical,
                &[
                    "Toxic-resistant monkeys",
                    "Vegetation-fused birds",
                    "Poison dart frogs",
                    "Giant mosquitoes",
                    "Jungle stalkers",
                ],
            ),
            (
                Climate::Arctic,
                &[
                    "White stalkers",
                    "Frost wolves",
                    "Cryo-adapted humans",
                    "Radioactive polar bears",
                    "Snow piercers",
                ],
            ),
            (
                Climate::Mediterranean,
                &[
                    "Pollution-filtering fish",
                    "Shoreline scavengers",
                    "Mutated dolphins",
                    "Plastic-eating crabs",
                    "Acidic jellyfish",
                ],
            ),
        ],
    ),
];

pub(super) const FLORA: &[(Theme, &[(Climate, &[&str])])] = &[
    (
        Theme::Fantasy,
        &[
            (
                Climate::Arid,
                &[
                    "Mirage blooms",
                    "Phoenix feather cacti",
                    "Singing sand lilies",
                    "Time-slowing succulents",
                    "Mana crystals",
                ],
            ),
            (
                Climate::Temperate,
                &[
                    "Whispering willows",
                    "Memory moss",
                    "Fae light flowers",
                    "Healing herbs",
                    "Talking oak trees",
                ],
            ),
            (
                Climate::Tropical,
                &[
                    "Dream fruit trees",
                    "Waterfall orchids",
                    "Sentient vines",
                    "Rainbow palms",
                    "Wish-granting flowers",
                ],
            ),
            (
                Climate::Arctic,
                &[
                    "Frost lilies",
                    "Eternal ice roses",
                    "Northern light flowers",
                    "Snow essence trees",
                    "Crystal pines",
                ],
            ),
            (
                Climate::Mediterranean,
                &[
                    "Oracle olives",
                    "Fate-weaving vines",
                    "Divine laurel",
                    "Prophetic herbs",
                    "Immortality figs",
                ],
            ),
        ],
    ),
    (
        Theme::SciFi,
        &[
            (
                Climate::Arid,
                &[
                    "Silicon flora",
                    "Metal-absorbing cacti",
                    "Bio-solar plants",
                    "Data storage succulents",
                    "Moisture harvesters",
                ],
            ),
            (
                Climate::Temperate,
                &[
                    "Oxygen hyperproducers",
                    "Bio-luminescent trees",
                    "Communication fungi",
                    "Medicine-producing flowers",
                    "Weather-controlling plants",
                ],
            ),
            (
                Climate::Tropical,
                &[
                    "Gene-altering fruits",
                    "Bio-electronic vines",
                    "Anti-gravity flowers",
                    "Species-adapting trees",
                    "Consciousness-expanding fungi",
                ],
            ),
            (
                Climate::Arctic,
                &[
                    "Thermal generator plants",
                    "Cryo-preserving lichens",
                    "Ice-penetrating roots",
                    "Bio-antifreeze producers",
                    "Data-storing crystals",
                ],
            ),
            (
                Climate::Mediterranean,
                &[
                    "Desalination trees",
                    "Current-generating seaweed",
                    "Bio-filter reeds",
                    "Holographic flowers",
                    "Atmospheric adjusters",
                ],
            ),
        ],
    ),
    (
        Theme::PostApocalyptic,
        &[
            (
                Climate::Arid,
                &[
                    "Radiation-feeding cacti",
                    "Metal-absorbing weeds",
                    "Toxic spore producers",
                    "Fallout-resistant shrubs",
                    "Mutated yuccas",
                ],
            ),
            (
                Climate::Temperate,
                &[
                    "Glowing fungi",
                    "Acid-resistant trees",
                    "Carnivorous wildflowers",
                    "Mutation-causing berries",
                    "Oxygen-hoarding plants",
                ],
            ),
            (
                Climate::Tropical,
                &[
                    "Irradiated palms",
                    "Rapidly-evolving vines",
                    "Memory-altering fruit",
                    "Hybrid fungi-animals",
                    "Toxic paradise flowers",
                ],
            ),
            (
                Climate::Arctic,
                &[
                    "Heat-stealing lichen",
                    "Nuclear winter trees",
                    "Frozen time capsule flowers",
                    "Radiation-preserving ice plants",
                    "Mutated evergreens",
                ],
            ),
            (
                Climate::Mediterranean,
                &[
                    "Oil-filtering reeds",
                    "Plastic-decomposing algae",
                    "Contamination indicator flowers",
                    "Salt-purifying trees",
                    "Human-repelling herbs",
                ],
            ),
        ],
    ),
];

pub(super) const DANGERS: &[(Theme, &[(Climate, &[&str])])] = &[
    (
        Theme::Fantasy,
        &[
            (
                Climate::Arid,
                &[
                    "Ancient buried curses",
                    "Sandstorm elementals",
                    "Mirage demons",
                    "Sun dragons",
                    "Heat madness",
                ],
            ),
            (
                Climate::Temperate,
                &[
                    "Forest guardians",
                    "Fae tricksters",
                    "Cursed ruins",
                    "Shapeshifting predators",
                    "Living storms",
                ],
            ),
            (
                Climate::Tropical,
                &[
                    "Jungle spirits",
                    "Carnivorous plants",
                    "Temple guardians",
                    "Venom sprites",
                    "Quicksand portals",
                ],
            ),
            (
                Climate::Arctic,
                &[
                    "Frost giants",
                    "Avalanche spirits",
                    "Ice curses",
                    "Soul-freezing winds",
                    "Hunger madness",
                ],
            ),
            (
                Climate::Mediterranean,
                &[
                    "Sirens",
                    "Ancient sea monsters",
                    "Cursed islands",
                    "Wine enchantments",
                    "Memory thieves",
                ],
            ),
        ],
    ),
    (
        Theme::SciFi,
        &[
            (
                Climate::Arid,
                &[
                    "Rogue terraforming machines",
                    "Sand-based nanobots",
                    "Heat-activated mines",
                    "Mirage defense systems",
                    "Water thieves",
                ],
            ),
            (
                Climate::Temperate,
                &[
                    "Surveillance ecosystems",
                    "Rogue bioweapons",
                    "Perception filters",
                    "Reality distortion fields",
                    "Neural parasites",
                ],
            ),
            (
                Climate::Tropical,
                &[
                    "Gene-altering pollens",
                    "Predatory plants",
                    "Machine-jungle hybrids",
                    "Bio-electronic hazards",
                    "Memory-altering spores",
                ],
            ),
            (
                Climate::Arctic,
                &[
                    "Cryo-weapons",
                    "Consciousness-stealing ice",
                    "Sub-zero nanites",
                    "White-out zones",
                    "Thermal anomalies",
                ],
            ),
            (
                Climate::Mediterranean,
                &[
                    "Water-borne data viruses",
                    "Mind-controlling parasites",
                    "Coastal defense systems",
                    "Weather control malfunctions",
                    "Reality bubbles",
                ],
            ),
        ],
    ),
    (
        Theme::PostApocalyptic,
        &[
            (
                Climate::Arid,
                &[
                    "Radiation zones",
                    "Dust storms",
                    "Cannibalistic tribes",
                    "Ancient weapon caches",
                    "Nuclear mirages",
                ],
            ),
            (
                Climate::Temperate,
                &[
                    "Toxic rain",
                    "Mutated predators",
                    "Bandit territories",
                    "Collapsing infrastructure",
                    "Disease zones",
                ],
            ),
            (
                Climate::Tropical,
                &[
                    "Poisoned water",
                    "Predatory plant life",
                    "Feral survivor camps",
                    "Quicksand pits",
                    "Hallucinogenic spores",
                ],
            ),
            (
                Climate::Arctic,
                &[
                    "Deadly blizzards",
                    "Starvation",
                    "Ice pirates",
                    "Underground radiation",
                    "Freezing fog",
                ],
            ),
            (
                Climate::Mediterranean,
                &[
                    "Coastal raiders",
                    "Polluted seas",
                    "Resource wars",
                    "Flooded ruins",
                    "Water-borne diseases",
                ],
            ),
        ],
    ),
];

pub(super) const CULTURES: &[(Theme, &[&str])] = &[
    (
        Theme::Fantasy,
        &[
            "Ancient elven dynasties",
            "Dwarf mining guilds",
            "Nomadic halfling tribes",
            "Human kingdoms",
            "Dragonborn clans",
            "Magical academies",
            "Twilight courts",
            "Oracle temples",
            "Beast-people tribes",
            "Elemental communes",
        ],
    ),
    (
        Theme::SciFi,
        &[
            "Space mining corporations",
            "AI collectives",
            "Human resistance",
            "Genetic purists",
            "Cyborg syndicates",
            "Terraforming guilds",
            "Quantum researchers",
            "Alien embassies",
            "Data monks",
            "Void explorers",
        ],
    ),
    (
        Theme::PostApocalyptic,
        &[
            "Bunker dwellers",
            "Wasteland raiders",
            "Water barons",
            "Tech salvagers",
            "Radiation cultists",
            "Agricultural communes",
            "Trading caravans",
            "Stronghold cities",
            "Nomad tribes",
            "Memory keepers",
        ],
    ),
];

pub(super) const LANGUAGES: &[(Theme, &[&str])] = &[
    (
        Theme::Fantasy,
        &[
            "Ancient Elvish",
            "Dwarven Runes",
            "Common Tongue",
            "Sylvan Whispers",
            "Draconic",
            "Abyssal",
            "Celestial",
            "Primordial",
            "Fae Speech",
            "Gnomish",
        ],
    ),
    (
        Theme::SciFi,
        &[
            "Galactic Standard",
            "Binary Code",
            "Quantum Script",
            "Neural Interface",
            "Alien Dialects",
            "Mathematical Patterns",
            "Light Pulses",
            "Sonic Patterns",
            "Encoded Transmissions",
            "Temporal Linguistics",
        ],
    ),
    (
        Theme::PostApocalyptic,
        &[
            "Wasteland Slang",
            "Old World English",
            "Trade Pidgin",
            "Signal Code",
            "Radiation Clicks",
            "Bunker Dialect",
            "Survivor's Cant",
            "Scavenger Signs",
            "Tech-Speech",
            "Brotherhood Code",
        ],
    ),
];

pub(super) const NAME_PREFIXES: &[(Theme, &[&str])] = &[
    (
        Theme::Fantasy,
        &[
            "Aure",
            "Eld",
            "Myth",
            "Zan",
            "Thaur",
            "Crystal",
            "Ever",
            "Fel",
            "Glimmer",
            "Iron",
        ],
    ),
    (
        Theme::SciFi,
        &[
            "Xen",
            "Nova",
            "Qar",
            "Zy",
            "Eco",
            "Neb",
            "Sol",
            "Astra",
            "Orb",
            "Pulse",
        ],
    ),
    (
        Theme::PostApocalyptic,
        &[
            "Ruina",
            "Ash",
            "Hollow",
            "Grim",
            "Waste",
            "Dead",
            "Lost",
            "Broken",
            "Rust",
            "Shadow",
        ],
    ),
];

pub(super) const NAME_SUFFIXES: &[(Theme, &[&str])] = &[
    (
        Theme::Fantasy,
        &[
            "ia",
            "or",
            "an",
            "eth",
            "haven",
            "wood",
            "vale",
            "gard",
            "heart",
            "realm",
        ],
    ),
    (
        Theme::SciFi,
        &[
            "-Prime",
            "-X",
            "-7",
            "-II",
            "-Nova",
            "-Core",
            "-Nexus",
            "-Sphere",
            "-Alpha",
            "-Zero",
        ],
    ),
    (
        Theme::PostApocalyptic,
        &[
            "fall",
            "land",
            "vale",
            "berg",
            "waste",
            "ruins",
            "haven",
            "outpost",
            "refuge",
            "pit",
        ],
    ),
];
