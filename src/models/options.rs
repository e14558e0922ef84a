//! Fixed option lists offered by choice controls.
//!
//! These lists only drive what a rendering surface proposes; the store accepts any
//! value for the corresponding field.

// Lithology & texture
pub const LITHOLOGY: &[&str] = &[
    "Granite",
    "Shale",
    "Sandstone",
    "Limestone",
    "Basalt",
    "Gneiss",
    "Schist",
    "Quartzite",
    "Dolerite",
    "Andesite",
];
pub const SUB_LITHOLOGY: &[&str] = &[
    "Coarse-grained",
    "Fine-grained",
    "Porphyritic",
    "Vesicular",
    "Foliated",
    "Massive",
];
pub const COLOUR: &[&str] = &[
    "Gray", "Brown", "Red", "Green", "Black", "White", "Yellow", "Pink", "Orange", "Purple",
];
pub const TEXTURE: &[&str] = &[
    "Massive",
    "Foliated",
    "Banded",
    "Brecciated",
    "Vesicular",
    "Porphyritic",
];
pub const GRAIN_SIZE: &[&str] = &["Very Fine", "Fine", "Medium", "Coarse", "Very Coarse"];
pub const SORTING: &[&str] = &["Well Sorted", "Moderately Sorted", "Poorly Sorted"];

// Structure & fabric
pub const STRUCTURE: &[&str] = &[
    "Massive",
    "Foliated",
    "Bedded",
    "Jointed",
    "Fractured",
    "Brecciated",
];
pub const FABRIC: &[&str] = &["Isotropic", "Anisotropic", "Lineated", "Foliated"];
pub const CLASTS: &[&str] = &["None", "Rare", "Common", "Abundant"];
pub const PHENOCRYSTS: &[&str] = &["None", "Rare", "Common", "Abundant"];

// Alteration & mineralisation
pub const ALTERATION_TYPE: &[&str] = &[
    "Chloritic",
    "Sericitic",
    "Argillic",
    "Propylitic",
    "Potassic",
    "Silicic",
    "Carbonate",
];
pub const ALTERATION_INTENSITY: &[&str] = &["Weak", "Moderate", "Strong", "Intense", "Pervasive"];
pub const MINERALISATION: &[&str] = &["None", "Disseminated", "Veinlet", "Massive", "Stockwork"];
pub const SULPHIDES: &[&str] = &[
    "Pyrite",
    "Chalcopyrite",
    "Galena",
    "Sphalerite",
    "Arsenopyrite",
    "Pyrrhotite",
];
pub const OXIDATION_STATE: &[&str] = &[
    "Fresh",
    "Slightly Oxidised",
    "Moderately Oxidised",
    "Highly Oxidised",
    "Completely Oxidised",
];

// Veins & weathering
pub const VEIN_TYPE: &[&str] = &["Quartz", "Calcite", "Quartz-Carbonate", "Sulphide", "Oxide"];
pub const VEIN_DENSITY: &[&str] = &["None", "Rare", "Common", "Abundant", "Stockwork"];
pub const VEIN_ORIENTATION: &[&str] = &["Parallel", "Perpendicular", "Oblique", "Random"];
pub const MINERAL_ASSOCIATION: &[&str] =
    &["Quartz", "Feldspar", "Mica", "Chlorite", "Epidote", "Calcite"];
pub const WEATHERING: &[&str] = &[
    "Fresh",
    "Slightly Weathered",
    "Moderately Weathered",
    "Highly Weathered",
    "Completely Weathered",
];
pub const REGOLITH_TYPE: &[&str] = &[
    "Bedrock",
    "Saprolite",
    "Saprock",
    "Transported",
    "Colluvium",
];

// Depth strat
pub const STRAT_LITHO: &[&str] = &[
    "Granite",
    "Conglomerate",
    "Sandstone",
    "Mudstone",
    "Siltstone",
    "Shale",
    "Limestone",
    "Dolomite",
    "Basalt",
    "Andesite",
    "Rhyolite",
    "Gabbro",
    "Diorite",
    "Granodiorite",
    "Gneiss",
    "Schist",
    "Quartzite",
    "Marble",
    "Slate",
    "Phyllite",
];
pub const STRAT_WEATHERING: &[&str] = &[
    "Fresh",
    "Slightly Weathered",
    "Moderately Weathered",
    "Highly Weathered",
    "Completely Weathered",
    "Residual Soil",
];
pub const STRAT_SEDIMENTOLOGY: &[&str] = &[
    "Massive",
    "Bedded",
    "Laminated",
    "Cross-bedded",
    "Graded",
    "Ripple marks",
    "Mud cracks",
];
pub const STRAT_NON_SEDIMENTARY: &[&str] = &[
    "Massive",
    "Foliated",
    "Porphyritic",
    "Vesicular",
    "Amygdaloidal",
    "Brecciated",
    "Mylonitic",
];

// Depth vein
pub const VEIN_STRUCTURE_TYPE: &[&str] = &[
    "Quartz vein",
    "Calcite vein",
    "Quartz-carbonate",
    "Sulphide vein",
    "Oxide vein",
    "Epidote vein",
    "Chlorite vein",
    "Tension gash",
    "Shear vein",
    "Stockwork",
    "Breccia",
];
pub const VEIN_TEXTURE: &[&str] = &[
    "Massive",
    "Banded",
    "Vuggy",
    "Comb texture",
    "Cockade",
    "Colloform",
    "Crustiform",
    "Saccharoidal",
];
pub const VEIN_INFILL_COMP: &[&str] = &[
    "Quartz",
    "Calcite",
    "Dolomite",
    "Chlorite",
    "Epidote",
    "Pyrite",
    "Chalcopyrite",
    "Galena",
    "Sphalerite",
    "Hematite",
    "Goethite",
];
pub const STRUCTURE_ALPHA: &[&str] = &["0-15", "15-30", "30-45", "45-60", "60-75", "75-90"];
pub const STRUCTURE_BETA: &[&str] = &[
    "0-45", "45-90", "90-135", "135-180", "180-225", "225-270", "270-315", "315-360",
];
pub const GEOMETRY_KINEMATICS: &[&str] = &[
    "Normal",
    "Reverse",
    "Strike-slip",
    "Oblique",
    "Tension",
    "Shear",
    "Extension",
    "Compression",
];

// Depth mineral
pub const MINERAL_ABUNDANCE: &[&str] = &[
    "Trace (<1%)",
    "Minor (1-5%)",
    "Moderate (5-20%)",
    "Common (20-40%)",
    "Abundant (40-60%)",
    "Dominant (>60%)",
];
pub const MINERAL_TYPE: &[&str] = &[
    "Quartz",
    "Feldspar",
    "Mica",
    "Chlorite",
    "Epidote",
    "Calcite",
    "Dolomite",
    "Pyrite",
    "Chalcopyrite",
    "Galena",
    "Sphalerite",
    "Magnetite",
    "Hematite",
    "Goethite",
    "Malachite",
    "Azurite",
    "Gold",
    "Silver",
    "Copper",
];
pub const MINERALISATION_STYLE: &[&str] = &[
    "Disseminated",
    "Veinlet",
    "Massive",
    "Stockwork",
    "Breccia-hosted",
    "Replacement",
    "Skarn",
    "Porphyry",
    "Epithermal",
    "Orogenic",
    "VMS",
    "SEDEX",
    "MVT",
];

// Depth alteration
pub const DEPTH_ALT_INTENSITY: &[&str] = &[
    "Weak",
    "Weak-Moderate",
    "Moderate",
    "Moderate-Strong",
    "Strong",
    "Pervasive",
];
pub const DEPTH_ALT_TYPE: &[&str] = &[
    "Chloritic",
    "Sericitic",
    "Argillic",
    "Advanced Argillic",
    "Propylitic",
    "Potassic",
    "Sodic",
    "Silicic",
    "Carbonate",
    "Hematitic",
    "Epidote",
    "Biotite",
    "Tourmaline",
];
pub const DEPTH_ALT_STYLE: &[&str] = &[
    "Pervasive",
    "Selective",
    "Vein-controlled",
    "Fracture-controlled",
    "Disseminated",
    "Patchy",
    "Zoned",
    "Overprinting",
];
pub const DEPTH_ALT_COLOUR: &[&str] = &[
    "White",
    "Gray",
    "Light Gray",
    "Dark Gray",
    "Black",
    "Red",
    "Pink",
    "Orange",
    "Yellow",
    "Green",
    "Blue",
    "Brown",
    "Purple",
];
pub const DEPTH_ALT_COLOUR_TONE: &[&str] =
    &["Light", "Medium", "Dark", "Very Dark", "Pale", "Bright", "Dull"];

// Depth conglomerate
pub const CONGLOMERATE_MATRIX_PACKAGE: &[&str] = &[
    "Matrix-supported",
    "Clast-supported",
    "Mixed support",
    "Framework",
    "Floating clasts",
];
pub const CONGLOMERATE_LITHO_SUBUNIT: &[&str] = &[
    "Granite",
    "Basalt",
    "Sandstone",
    "Limestone",
    "Quartzite",
    "Chert",
    "Volcanic",
    "Metamorphic",
    "Sedimentary",
];
pub const CLAST_PACKING: &[&str] = &["Loose", "Moderate", "Tight", "Very Tight", "Imbricated"];
pub const CLAST_COMPOSITION: &[&str] = &[
    "Monomict",
    "Polymict",
    "Granite clasts",
    "Basalt clasts",
    "Quartzite clasts",
    "Limestone clasts",
    "Chert clasts",
    "Mixed lithology",
];
pub const CLAST_SORTING: &[&str] = &[
    "Very Well Sorted",
    "Well Sorted",
    "Moderately Sorted",
    "Poorly Sorted",
    "Very Poorly Sorted",
];
pub const CLAST_ROUNDING: &[&str] = &[
    "Angular",
    "Sub-angular",
    "Sub-rounded",
    "Rounded",
    "Well Rounded",
];
pub const CLAST_SPHERICITY: &[&str] = &["Low", "Moderate", "High", "Very High"];
pub const CLAST_SIZE_MAX: &[&str] = &[
    "Granule (2-4mm)",
    "Pebble (4-64mm)",
    "Cobble (64-256mm)",
    "Boulder (>256mm)",
    "Small pebble",
    "Medium pebble",
    "Large pebble",
];
pub const PEBBLE_SIZE: &[&str] = &[
    "Fine (4-8mm)",
    "Medium (8-16mm)",
    "Coarse (16-32mm)",
    "Very Coarse (32-64mm)",
];
pub const CONGLOMERATE_GRAIN_SIZE: &[&str] = &[
    "Clay",
    "Silt",
    "Very Fine Sand",
    "Fine Sand",
    "Medium Sand",
    "Coarse Sand",
    "Very Coarse Sand",
    "Granule",
];
pub const MATURITY: &[&str] = &["Immature", "Submature", "Mature", "Supermature"];
pub const FINING: &[&str] = &["Fining upward", "Coarsening upward", "Uniform", "Irregular"];
pub const GRAIN_SHAPE: &[&str] = &[
    "Angular",
    "Sub-angular",
    "Sub-rounded",
    "Rounded",
    "Well Rounded",
    "Spherical",
    "Elongate",
    "Platy",
];
pub const CONGLOMERATE_TEXTURE: &[&str] = &[
    "Massive",
    "Bedded",
    "Graded",
    "Cross-bedded",
    "Imbricated",
    "Chaotic",
    "Stratified",
];
