use serde::{Deserialize, Serialize};

pub const UNTITLED_LOOK: &str = "Untitled Look";
pub const UNTITLED_EXERCISE: &str = "Untitled Exercise";
pub const DEFAULT_SUB_MUSCLE: &str = "Sub Muscle";
pub const NO_OP_LINK: &str = "#";

fn untitled_look() -> String {
    UNTITLED_LOOK.to_string()
}

fn untitled_exercise() -> String {
    UNTITLED_EXERCISE.to_string()
}

fn default_sub_muscle() -> String {
    DEFAULT_SUB_MUSCLE.to_string()
}

fn no_op_link() -> String {
    NO_OP_LINK.to_string()
}

/// A named collection of records sharing one asset folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub name: String,
    pub folder: String,
    pub items: CategoryItems,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CategoryItems {
    Outfits(Vec<Outfit>),
    MuscleGroups(Vec<MuscleGroup>),
}

impl CategoryItems {
    pub fn len(&self) -> usize {
        match self {
            CategoryItems::Outfits(outfits) => outfits.len(),
            CategoryItems::MuscleGroups(groups) => groups.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Outfit {
    #[serde(default = "untitled_look")]
    pub title: String,
    #[serde(rename = "image", default)]
    pub image_file: String,
    #[serde(default)]
    pub brands: Vec<BrandLink>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BrandLink {
    #[serde(default)]
    pub label: String,
    #[serde(default = "no_op_link")]
    pub link: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MuscleGroup {
    #[serde(rename = "muscle_group")]
    pub name: String,
    #[serde(default)]
    pub folder: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub sub_muscles: Vec<SubMuscle>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SubMuscle {
    #[serde(default = "default_sub_muscle")]
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    #[serde(default = "untitled_exercise")]
    pub title: String,
    #[serde(rename = "gif", default)]
    pub gif_file: Option<String>,
}

/// On-disk shape of a category file.
#[derive(Deserialize, Debug)]
pub(crate) struct CategoryFile {
    pub category: Option<String>,
    #[serde(default)]
    pub folder: String,
    #[serde(default)]
    pub outfits: Vec<Outfit>,
    #[serde(default)]
    pub muscle_groups: Vec<MuscleGroup>,
}

impl CategoryFile {
    pub fn into_category(self, fallback_name: String) -> Category {
        let name = self.category.unwrap_or(fallback_name);
        let items = if self.muscle_groups.is_empty() {
            CategoryItems::Outfits(self.outfits)
        } else {
            CategoryItems::MuscleGroups(self.muscle_groups)
        };

        Category {
            name,
            folder: self.folder,
            items,
        }
    }
}

/// The dedicated muscle file holds either one group or a list of them.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub(crate) enum MuscleCatalogFile {
    Many(Vec<MuscleGroup>),
    One(MuscleGroup),
}

impl MuscleCatalogFile {
    pub fn into_groups(self) -> Vec<MuscleGroup> {
        match self {
            MuscleCatalogFile::Many(groups) => groups,
            MuscleCatalogFile::One(group) => vec![group],
        }
    }
}

/// Upper-cases the first letter of every run of letters and lower-cases the
/// rest, leaving other characters alone.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}

/// Display name for a category file without an explicit `category` key.
pub fn name_from_stem(stem: &str) -> String {
    title_case(&stem.replace('_', " "))
}
