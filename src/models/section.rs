use super::field::{Field, NumericField, TextField};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Logging categories under which intervals are recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum)]
pub enum Section {
    Lithology,
    Structure,
    Alteration,
    Samples,
    Photos,
    DepthStrat,
    DepthVein,
    DepthMineral,
    DepthAlteration,
    DepthConglomerate,
}

impl Section {
    pub const ALL: [Section; 10] = [
        Section::Lithology,
        Section::Alteration,
        Section::Structure,
        Section::Samples,
        Section::Photos,
        Section::DepthStrat,
        Section::DepthVein,
        Section::DepthMineral,
        Section::DepthAlteration,
        Section::DepthConglomerate,
    ];

    /// Human label, as shown in the navigation.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Lithology => "Lithology",
            Section::Structure => "Structure",
            Section::Alteration => "Alteration",
            Section::Samples => "Samples",
            Section::Photos => "Photos",
            Section::DepthStrat => "Depth Strat",
            Section::DepthVein => "Depth Vein",
            Section::DepthMineral => "Depth Mineral",
            Section::DepthAlteration => "Depth Alteration",
            Section::DepthConglomerate => "Depth Conglomerate",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Section::Lithology => "lithology",
            Section::Structure => "structure",
            Section::Alteration => "alteration",
            Section::Samples => "samples",
            Section::Photos => "photos",
            Section::DepthStrat => "depth_strat",
            Section::DepthVein => "depth_vein",
            Section::DepthMineral => "depth_mineral",
            Section::DepthAlteration => "depth_alteration",
            Section::DepthConglomerate => "depth_conglomerate",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        Section::ALL.into_iter().find(|sec| sec.to_db_str() == s)
    }

    /// Accepts the label ("Depth Vein"), the DB code or the kebab-case CLI name.
    pub fn from_label(s: &str) -> Option<Self> {
        let norm = s.trim().to_lowercase().replace([' ', '-'], "_");
        Section::from_db_str(&norm)
    }

    /// Attribute columns of this section's table, in display order.
    /// The depth columns always come first and are not repeated here.
    pub fn columns(&self) -> &'static [Field] {
        use Field::{Measure, SulphidePercent, Text};
        use TextField as T;

        match self {
            Section::Lithology => &[
                Text(T::Lithology),
                Text(T::SubLithology),
                Text(T::Colour),
                Text(T::Texture),
                Text(T::GrainSize),
                Text(T::Sorting),
            ],
            Section::Structure => &[
                Text(T::Structure),
                Text(T::Fabric),
                Text(T::Clasts),
                Text(T::Phenocrysts),
            ],
            Section::Alteration => &[
                Text(T::AlterationType),
                Text(T::AlterationIntensity),
                Text(T::Mineralisation),
                Text(T::Sulphides),
                SulphidePercent,
                Text(T::OxidationState),
            ],
            Section::Samples => &[
                Text(T::VeinType),
                Text(T::VeinDensity),
                Text(T::VeinOrientation),
                Text(T::MineralAssociation),
                Text(T::Weathering),
                Text(T::RegolithType),
                Text(T::ColourWeathered),
                Measure(NumericField::DepthToFresh),
            ],
            Section::Photos => &[Text(T::Notes)],
            Section::DepthStrat => &[
                Text(T::StratLitho),
                Text(T::StratWeathering),
                Text(T::StratSedimentology),
                Text(T::StratNonSedimentary),
                Text(T::StratNote),
            ],
            Section::DepthVein => &[
                Text(T::VeinStructureType),
                Text(T::VeinTexture),
                Text(T::VeinInfillComp),
                Text(T::StructureAlpha),
                Text(T::StructureBeta),
                Text(T::GeometryKinematics),
            ],
            Section::DepthMineral => &[
                Text(T::MineralAbundance),
                Text(T::MineralType),
                Text(T::MineralisationStyle),
            ],
            Section::DepthAlteration => &[
                Text(T::DepthAltIntensity),
                Text(T::DepthAltType),
                Text(T::DepthAltStyle),
                Text(T::DepthAltColour),
                Text(T::DepthAltColourTone),
                Text(T::DepthAltNote),
            ],
            Section::DepthConglomerate => &[
                Text(T::ConglomerateMatrixPackage),
                Text(T::ConglomerateLithoSubunit),
                Text(T::ClastPacking),
                Text(T::ClastComposition),
                Text(T::ClastSorting),
                Text(T::ClastRounding),
                Text(T::ClastSphericity),
                Text(T::ClastSizeMax),
                Text(T::PebbleSize),
                Text(T::ConglomerateGrainSize),
                Text(T::ConglomerateColour),
                Text(T::Maturity),
                Text(T::Fining),
                Text(T::GrainShape),
                Text(T::ConglomerateTexture),
            ],
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
