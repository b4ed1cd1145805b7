//! Maps catalog records to a presentation-neutral view model.

use crate::data::{title_case, Category, CategoryItems, Exercise, MuscleGroup, Outfit, SubMuscle};
use crate::resolver::{resolve_muscle_asset, resolve_outfit_image, AssetRef, AssetRoot, RenderOutcome};

pub const NO_SUB_SECTIONS: &str = "No sub-sections listed for this muscle group.";
pub const NO_EXERCISES: &str = "No exercises listed.";
pub const NO_GIF: &str = "No GIF available";

/// Fixed display box; images are contained within it, never measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
}

pub const IMAGE_FRAME: Frame = Frame {
    width: 300,
    height: 300,
};

pub const THUMBNAIL_FRAME: Frame = Frame {
    width: 150,
    height: 150,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandButton {
    pub label: String,
    pub href: String,
    pub new_context: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutfitRow {
    pub image: RenderOutcome<AssetRef>,
    pub title: String,
    pub links: Vec<BrandButton>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FramedImage {
    pub asset: RenderOutcome<AssetRef>,
    pub caption: String,
    pub frame: Frame,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseRow {
    /// `None` shows the [`NO_GIF`] placeholder.
    pub media: Option<RenderOutcome<AssetRef>>,
    pub frame: Frame,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExerciseList {
    Empty(&'static str),
    Rows(Vec<ExerciseRow>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubMuscleSection {
    pub heading: String,
    pub image: Option<FramedImage>,
    pub exercises: ExerciseList,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sections {
    Empty(&'static str),
    List(Vec<SubMuscleSection>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MuscleGroupView {
    pub heading: String,
    pub image: Option<FramedImage>,
    pub sections: Sections,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageBody {
    Outfits(Vec<OutfitRow>),
    MuscleGroup(MuscleGroupView),
}

/// One rendered selection, ready for an output format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub heading: String,
    pub body: PageBody,
}

pub const PAGE_TITLE: &str = "Outfit Vault";

impl Page {
    pub fn new(heading: impl Into<String>, body: PageBody) -> Self {
        Page {
            title: PAGE_TITLE.to_string(),
            heading: heading.into(),
            body,
        }
    }
}

pub fn render_outfit(outfit: &Outfit, folder: &str, root: &AssetRoot) -> OutfitRow {
    let links = outfit
        .brands
        .iter()
        .map(|brand| BrandButton {
            label: title_case(&brand.label),
            href: brand.link.clone(),
            new_context: true,
        })
        .collect();

    OutfitRow {
        image: resolve_outfit_image(root, folder, &outfit.image_file),
        title: outfit.title.clone(),
        links,
    }
}

pub fn render_outfits(outfits: &[Outfit], folder: &str, root: &AssetRoot) -> Vec<OutfitRow> {
    outfits
        .iter()
        .map(|outfit| render_outfit(outfit, folder, root))
        .collect()
}

fn framed(root: &AssetRoot, folder: &str, file: Option<&str>, caption: &str) -> Option<FramedImage> {
    resolve_muscle_asset(root, folder, file).map(|asset| FramedImage {
        asset,
        caption: caption.to_string(),
        frame: IMAGE_FRAME,
    })
}

fn render_exercise(exercise: &Exercise, folder: &str, root: &AssetRoot) -> ExerciseRow {
    ExerciseRow {
        media: resolve_muscle_asset(root, folder, exercise.gif_file.as_deref()),
        frame: THUMBNAIL_FRAME,
        title: exercise.title.clone(),
    }
}

fn render_sub_muscle(sub: &SubMuscle, folder: &str, root: &AssetRoot) -> SubMuscleSection {
    let exercises = if sub.exercises.is_empty() {
        ExerciseList::Empty(NO_EXERCISES)
    } else {
        ExerciseList::Rows(
            sub.exercises
                .iter()
                .map(|exercise| render_exercise(exercise, folder, root))
                .collect(),
        )
    };

    SubMuscleSection {
        heading: sub.name.clone(),
        image: framed(root, folder, sub.image.as_deref(), &sub.name),
        exercises,
    }
}

pub fn render_muscle_group(group: &MuscleGroup, root: &AssetRoot) -> MuscleGroupView {
    let sections = if group.sub_muscles.is_empty() {
        Sections::Empty(NO_SUB_SECTIONS)
    } else {
        Sections::List(
            group
                .sub_muscles
                .iter()
                .map(|sub| render_sub_muscle(sub, &group.folder, root))
                .collect(),
        )
    };

    MuscleGroupView {
        heading: group.name.clone(),
        image: framed(root, &group.folder, group.image.as_deref(), &group.name),
        sections,
    }
}

/// Renders an outfit category. Muscle-group categories need a group choice
/// first, so they return `None` here.
pub fn render_category(category: &Category, root: &AssetRoot) -> Option<Page> {
    match &category.items {
        CategoryItems::Outfits(outfits) => Some(Page::new(
            category.name.clone(),
            PageBody::Outfits(render_outfits(outfits, &category.folder, root)),
        )),
        CategoryItems::MuscleGroups(_) => None,
    }
}

pub fn render_muscle_page(group: &MuscleGroup, root: &AssetRoot) -> Page {
    Page::new(
        group.name.clone(),
        PageBody::MuscleGroup(render_muscle_group(group, root)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::BrandLink;
    use crate::resolver::UNSUPPORTED_IMAGE;

    fn url_root() -> AssetRoot {
        AssetRoot::Url("/static".to_string())
    }

    fn outfit(json: &str) -> Outfit {
        serde_json::from_str(json).unwrap()
    }

    fn group(json: &str) -> MuscleGroup {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn bomber_renders_one_titled_row_with_one_link() {
        let bomber = outfit(
            r#"{"title":"Bomber","image":"b.png","brands":[{"label":"store a","link":"https://a.example"}]}"#,
        );
        let row = render_outfit(&bomber, "", &url_root());

        assert_eq!(row.title, "Bomber");
        assert_eq!(row.image, RenderOutcome::Ready(AssetRef::Url("/static/b.png".to_string())));
        assert_eq!(
            row.links,
            [BrandButton {
                label: "Store A".to_string(),
                href: "https://a.example".to_string(),
                new_context: true,
            }]
        );
    }

    #[test]
    fn brands_keep_their_order_and_default_link() {
        let look = Outfit {
            title: "Layers".to_string(),
            image_file: "l.gif".to_string(),
            brands: vec![
                BrandLink {
                    label: "zeta".to_string(),
                    link: "https://z.example".to_string(),
                },
                BrandLink {
                    label: "alpha".to_string(),
                    link: "#".to_string(),
                },
            ],
        };
        let row = render_outfit(&look, "coats", &url_root());

        let labels: Vec<&str> = row.links.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["Zeta", "Alpha"]);
        assert_eq!(row.links[1].href, "#");
        assert_eq!(row.image, RenderOutcome::Warning(UNSUPPORTED_IMAGE.to_string()));
    }

    #[test]
    fn missing_title_renders_untitled_look() {
        let row = render_outfit(&outfit(r#"{"image":"x.jpg"}"#), "", &url_root());
        assert_eq!(row.title, "Untitled Look");
        assert!(row.links.is_empty());
    }

    #[test]
    fn biceps_marks_only_the_empty_sub_muscle() {
        let biceps = group(
            r#"{
                "muscle_group": "Biceps",
                "folder": "biceps",
                "image": "biceps.png",
                "sub_muscles": [
                    {"name": "Long Head", "exercises": [{"title": "Curl", "gif": "curl.gif"}, {}]},
                    {"name": "Short Head", "exercises": []}
                ]
            }"#,
        );
        let view = render_muscle_group(&biceps, &url_root());

        assert_eq!(view.heading, "Biceps");
        let image = view.image.unwrap();
        assert_eq!(image.frame, IMAGE_FRAME);
        assert_eq!(image.caption, "Biceps");
        assert_eq!(
            image.asset,
            RenderOutcome::Ready(AssetRef::Url("/static/muscles/biceps/biceps.png".to_string()))
        );

        let Sections::List(sections) = view.sections else {
            panic!("expected sub-muscle sections");
        };
        assert_eq!(sections.len(), 2);

        let ExerciseList::Rows(rows) = &sections[0].exercises else {
            panic!("expected exercise rows");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title, "Curl");
        assert_eq!(
            rows[0].media,
            Some(RenderOutcome::Ready(AssetRef::Url(
                "/static/muscles/biceps/curl.gif".to_string()
            )))
        );
        assert_eq!(rows[1].title, "Untitled Exercise");
        assert_eq!(rows[1].media, None);

        assert_eq!(sections[1].exercises, ExerciseList::Empty(NO_EXERCISES));
        let empty_count = sections
            .iter()
            .filter(|s| s.exercises == ExerciseList::Empty(NO_EXERCISES))
            .count();
        assert_eq!(empty_count, 1);
    }

    #[test]
    fn group_without_sub_muscles_shows_message() {
        let view = render_muscle_group(&group(r#"{"muscle_group":"Calves"}"#), &url_root());
        assert_eq!(view.image, None);
        assert_eq!(view.sections, Sections::Empty(NO_SUB_SECTIONS));
    }

    #[test]
    fn muscle_categories_need_a_group_choice() {
        let category = Category {
            name: "Training".to_string(),
            folder: String::new(),
            items: CategoryItems::MuscleGroups(vec![group(r#"{"muscle_group":"Back"}"#)]),
        };
        assert_eq!(render_category(&category, &url_root()), None);
    }
}
