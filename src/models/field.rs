use super::options;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Declares the classification fields together with their canonical name, the
/// column label and the option list a choice control offers (if any).
macro_rules! text_fields {
    ($( $variant:ident => $name:literal, $label:literal, $options:expr; )*) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum TextField {
            $( #[serde(rename = $name)] $variant, )*
        }

        impl TextField {
            pub const ALL: &'static [TextField] = &[ $( TextField::$variant, )* ];

            pub fn name(self) -> &'static str {
                match self { $( TextField::$variant => $name, )* }
            }

            pub fn label(self) -> &'static str {
                match self { $( TextField::$variant => $label, )* }
            }

            pub fn options(self) -> Option<&'static [&'static str]> {
                match self { $( TextField::$variant => $options, )* }
            }
        }
    };
}

text_fields! {
    Lithology => "lithology", "Lithology", Some(options::LITHOLOGY);
    SubLithology => "sub_lithology", "Sub-Lithology", Some(options::SUB_LITHOLOGY);
    Colour => "colour", "Colour", Some(options::COLOUR);
    Texture => "texture", "Texture", Some(options::TEXTURE);
    GrainSize => "grain_size", "Grain Size", Some(options::GRAIN_SIZE);
    Sorting => "sorting", "Sorting", Some(options::SORTING);

    Structure => "structure", "Structure", Some(options::STRUCTURE);
    Fabric => "fabric", "Fabric", Some(options::FABRIC);
    Clasts => "clasts", "Clasts", Some(options::CLASTS);
    Phenocrysts => "phenocrysts", "Phenocrysts", Some(options::PHENOCRYSTS);

    AlterationType => "alteration_type", "Alteration Type", Some(options::ALTERATION_TYPE);
    AlterationIntensity => "alteration_intensity", "Alteration Intensity", Some(options::ALTERATION_INTENSITY);
    Mineralisation => "mineralisation", "Mineralisation", Some(options::MINERALISATION);
    Sulphides => "sulphides", "Sulphides", Some(options::SULPHIDES);
    OxidationState => "oxidation_state", "Oxidation State", Some(options::OXIDATION_STATE);

    VeinType => "vein_type", "Vein Type", Some(options::VEIN_TYPE);
    VeinDensity => "vein_density", "Vein Density", Some(options::VEIN_DENSITY);
    VeinOrientation => "vein_orientation", "Vein Orientation", Some(options::VEIN_ORIENTATION);
    MineralAssociation => "mineral_association", "Mineral Association", Some(options::MINERAL_ASSOCIATION);
    Weathering => "weathering", "Weathering", Some(options::WEATHERING);
    RegolithType => "regolith_type", "Regolith Type", Some(options::REGOLITH_TYPE);
    ColourWeathered => "colour_weathered", "Colour (Weathered)", Some(options::COLOUR);

    Notes => "notes", "Notes", None;

    StratLitho => "strat_litho", "Litho", Some(options::STRAT_LITHO);
    StratWeathering => "strat_weathering", "Weathering", Some(options::STRAT_WEATHERING);
    StratSedimentology => "strat_sedimentology", "Sedimentology", Some(options::STRAT_SEDIMENTOLOGY);
    StratNonSedimentary => "strat_non_sedimentary", "Non-Sedimentary", Some(options::STRAT_NON_SEDIMENTARY);
    StratNote => "strat_note", "Note", None;

    VeinStructureType => "vein_structure_type", "Structure Type", Some(options::VEIN_STRUCTURE_TYPE);
    VeinTexture => "vein_texture", "Vein Texture", Some(options::VEIN_TEXTURE);
    VeinInfillComp => "vein_infill_comp", "Infill Composition", Some(options::VEIN_INFILL_COMP);
    StructureAlpha => "structure_alpha", "Alpha", Some(options::STRUCTURE_ALPHA);
    StructureBeta => "structure_beta", "Beta", Some(options::STRUCTURE_BETA);
    GeometryKinematics => "geometry_kinematics", "Geometry/Kinematics", Some(options::GEOMETRY_KINEMATICS);

    MineralAbundance => "mineral_abundance", "Abundance", Some(options::MINERAL_ABUNDANCE);
    MineralType => "mineral_type", "Mineral Type", Some(options::MINERAL_TYPE);
    MineralisationStyle => "mineralisation_style", "Mineralisation Style", Some(options::MINERALISATION_STYLE);

    DepthAltIntensity => "depth_alt_intensity", "Intensity", Some(options::DEPTH_ALT_INTENSITY);
    DepthAltType => "depth_alt_type", "Type", Some(options::DEPTH_ALT_TYPE);
    DepthAltStyle => "depth_alt_style", "Style", Some(options::DEPTH_ALT_STYLE);
    DepthAltColour => "depth_alt_colour", "Colour", Some(options::DEPTH_ALT_COLOUR);
    DepthAltColourTone => "depth_alt_colour_tone", "Colour Tone", Some(options::DEPTH_ALT_COLOUR_TONE);
    DepthAltNote => "depth_alt_note", "Note", None;

    ConglomerateMatrixPackage => "conglomerate_matrix_package", "Matrix Package", Some(options::CONGLOMERATE_MATRIX_PACKAGE);
    ConglomerateLithoSubunit => "conglomerate_litho_subunit", "Litho Sub-unit", Some(options::CONGLOMERATE_LITHO_SUBUNIT);
    ClastPacking => "clast_packing", "Clast Packing", Some(options::CLAST_PACKING);
    ClastComposition => "clast_composition", "Composition", Some(options::CLAST_COMPOSITION);
    ClastSorting => "clast_sorting", "Clast Sorting", Some(options::CLAST_SORTING);
    ClastRounding => "clast_rounding", "Clast Rounding", Some(options::CLAST_ROUNDING);
    ClastSphericity => "clast_sphericity", "Clast Sphericity", Some(options::CLAST_SPHERICITY);
    ClastSizeMax => "clast_size_max", "Clast Size Max", Some(options::CLAST_SIZE_MAX);
    PebbleSize => "pebble_size", "Pebble Size", Some(options::PEBBLE_SIZE);
    ConglomerateGrainSize => "conglomerate_grain_size", "Grain Size", Some(options::CONGLOMERATE_GRAIN_SIZE);
    ConglomerateColour => "conglomerate_colour", "Colour", Some(options::COLOUR);
    Maturity => "maturity", "Maturity", Some(options::MATURITY);
    Fining => "fining", "Fining", Some(options::FINING);
    GrainShape => "grain_shape", "Grain Shape", Some(options::GRAIN_SHAPE);
    ConglomerateTexture => "conglomerate_texture", "Texture", Some(options::CONGLOMERATE_TEXTURE);
}

/// Free numeric measures carried by an entry besides the interval itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    DepthToFresh,
    ConglomerateFrom,
    ConglomerateTo,
}

impl NumericField {
    pub const ALL: &'static [NumericField] = &[
        NumericField::DepthToFresh,
        NumericField::ConglomerateFrom,
        NumericField::ConglomerateTo,
    ];

    pub fn name(self) -> &'static str {
        match self {
            NumericField::DepthToFresh => "depth_to_fresh",
            NumericField::ConglomerateFrom => "conglomerate_from",
            NumericField::ConglomerateTo => "conglomerate_to",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NumericField::DepthToFresh => "Depth to Fresh (m)",
            NumericField::ConglomerateFrom => "Conglomerate From (m)",
            NumericField::ConglomerateTo => "Conglomerate To (m)",
        }
    }
}

/// Every field of a `LogEntry` a caller may update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    DepthFrom,
    DepthTo,
    SulphidePercent,
    Measure(NumericField),
    Text(TextField),
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::DepthFrom => "depth_from",
            Field::DepthTo => "depth_to",
            Field::SulphidePercent => "sulphide_percent",
            Field::Measure(m) => m.name(),
            Field::Text(t) => t.name(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::DepthFrom => "Depth From (m)",
            Field::DepthTo => "Depth To (m)",
            Field::SulphidePercent => "Sulphide %",
            Field::Measure(m) => m.label(),
            Field::Text(t) => t.label(),
        }
    }

    /// Option list for enumerated fields; `None` for numbers and free text.
    pub fn options(self) -> Option<&'static [&'static str]> {
        match self {
            Field::Text(t) => t.options(),
            _ => None,
        }
    }

    /// All updatable fields, depths first.
    pub fn all() -> Vec<Field> {
        let mut out = vec![Field::DepthFrom, Field::DepthTo, Field::SulphidePercent];
        out.extend(NumericField::ALL.iter().map(|m| Field::Measure(*m)));
        out.extend(TextField::ALL.iter().map(|t| Field::Text(*t)));
        out
    }

    /// Lookup by canonical name. Accepts `kebab-case` and any letter case.
    pub fn from_name(name: &str) -> Option<Field> {
        let wanted = name.trim().to_lowercase().replace('-', "_");
        Field::all().into_iter().find(|f| f.name() == wanted)
    }
}

/// A typed single-field mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    DepthFrom(f64),
    DepthTo(f64),
    SulphidePercent(u8),
    Measure(NumericField, f64),
    Text(TextField, String),
}

impl FieldUpdate {
    pub fn field(&self) -> Field {
        match self {
            FieldUpdate::DepthFrom(_) => Field::DepthFrom,
            FieldUpdate::DepthTo(_) => Field::DepthTo,
            FieldUpdate::SulphidePercent(_) => Field::SulphidePercent,
            FieldUpdate::Measure(m, _) => Field::Measure(*m),
            FieldUpdate::Text(t, _) => Field::Text(*t),
        }
    }

    /// Build an update from the raw text typed in a cell.
    ///
    /// Only the *shape* of the value is checked here (numbers must parse);
    /// depth rules are enforced by the store.
    pub fn parse(field: Field, raw: &str) -> AppResult<Self> {
        let value = raw.trim();

        let number = |v: &str| -> AppResult<f64> {
            v.parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(|| {
                    AppError::InvalidFieldValue(format!(
                        "'{}' is not a number (field {})",
                        v,
                        field.name()
                    ))
                })
        };

        Ok(match field {
            Field::DepthFrom => FieldUpdate::DepthFrom(number(value)?),
            Field::DepthTo => FieldUpdate::DepthTo(number(value)?),
            Field::SulphidePercent => {
                let pct = value.parse::<u8>().map_err(|_| {
                    AppError::InvalidFieldValue(format!(
                        "'{}' is not a whole percentage (field sulphide_percent)",
                        value
                    ))
                })?;
                FieldUpdate::SulphidePercent(pct)
            }
            Field::Measure(m) => FieldUpdate::Measure(m, number(value)?),
            // free text is stored untrimmed
            Field::Text(t) => FieldUpdate::Text(t, raw.to_string()),
        })
    }
}
