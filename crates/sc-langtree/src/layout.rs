//! Turtle-style geometry for the language tree.
//!
//! Coordinates have their origin at the canvas centre with y pointing up.
//! Headings are degrees counter-clockwise from +x. The layout produces a
//! flat draw list ([`Scene`]) so the renderer never walks the table itself.

use rand::Rng;
use rand::rngs::StdRng;

use crate::table::{Family, Rgb, count_languages};

/// Colour of the trunk.
pub const TRUNK_COLOR: Rgb = Rgb::new(0x5C, 0x40, 0x33);
/// Colour of titles and stars.
pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

/// Where the trunk starts.
pub const TRUNK_BASE: Point = Point::new(0.0, -300.0);
/// Trunk length.
pub const TRUNK_LENGTH: f32 = 120.0;
/// Trunk pen width.
pub const TRUNK_WIDTH: f32 = 15.0;
/// Diameter of the dot at the end of every word branch.
pub const WORD_DOT: f32 = 6.0;

/// Number of decorative stars.
pub const STAR_COUNT: usize = 60;

/// Main title.
pub const TITLE: &str = "Hierarchical Global Language Tree";
/// Scroll hint under the subtitle.
pub const SCROLL_HINT: &str = "Use arrow keys or mouse wheel to scroll and explore";
/// Legend at the bottom of the canvas.
pub const LEGEND: &str = "Root → Family → Subfamily → Language → Common Words";

/// A point in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal position, positive to the right.
    pub x: f32,
    /// Vertical position, positive upwards.
    pub y: f32,
}

impl Point {
    /// Build a point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The point `distance` units away along `heading`.
    pub fn advance(self, heading: f32, distance: f32) -> Self {
        let rad = heading.to_radians();
        Self::new(self.x + rad.cos() * distance, self.y + rad.sin() * distance)
    }
}

/// Text style of a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    /// Regular weight.
    Normal,
    /// Heavy weight.
    Bold,
    /// Slanted.
    Italic,
}

/// What part of the tree an element belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// The root trunk.
    Trunk,
    /// A language family.
    Family,
    /// A subfamily.
    Subfamily,
    /// A single language.
    Language,
    /// A common word (leaf).
    Word,
    /// Title, subtitle, hint or legend text.
    Title,
    /// Background decoration.
    Star,
}

/// When an element becomes visible during progressive drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    /// Drawn before anything else.
    Trunk,
    /// Drawn together with the family at this index.
    Family(usize),
    /// Drawn once every family is visible.
    Finish,
}

/// One drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// A straight pen stroke.
    Segment {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Pen width.
        width: f32,
        /// Stroke colour.
        color: Rgb,
    },
    /// A filled circle.
    Dot {
        /// Centre.
        center: Point,
        /// Diameter.
        diameter: f32,
        /// Fill colour.
        color: Rgb,
    },
    /// Horizontally centred text with its baseline at `at`.
    Label {
        /// Text to draw.
        text: String,
        /// Anchor point.
        at: Point,
        /// Font size in points.
        size: f32,
        /// Font style.
        style: FontStyle,
        /// Text colour.
        color: Rgb,
    },
}

/// A drawing primitive tagged with its tree position.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Drawing stage.
    pub stage: Stage,
    /// Tree level the element belongs to.
    pub kind: NodeKind,
    /// The primitive itself.
    pub element: Element,
}

/// Pen settings for one level of the tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelStyle {
    /// Angular spread of sibling branches.
    pub spread: f32,
    /// Branch length.
    pub length: f32,
    /// Pen width.
    pub width: f32,
    /// Distance from branch end to label.
    pub label_offset: f32,
    /// Label font size.
    pub font_size: f32,
    /// Label font style.
    pub style: FontStyle,
}

/// Families fan out over the full circle; only length and labels matter.
pub const FAMILY_LEVEL: LevelStyle = LevelStyle {
    spread: 360.0,
    length: 120.0,
    width: 9.0,
    label_offset: 20.0,
    font_size: 11.0,
    style: FontStyle::Bold,
};

/// Subfamily branches.
pub const SUBFAMILY_LEVEL: LevelStyle = LevelStyle {
    spread: 80.0,
    length: 95.0,
    width: 6.0,
    label_offset: 12.0,
    font_size: 9.0,
    style: FontStyle::Bold,
};

/// Language branches.
pub const LANGUAGE_LEVEL: LevelStyle = LevelStyle {
    spread: 70.0,
    length: 70.0,
    width: 3.5,
    label_offset: 10.0,
    font_size: 8.0,
    style: FontStyle::Normal,
};

/// Word branches.
pub const WORD_LEVEL: LevelStyle = LevelStyle {
    spread: 60.0,
    length: 45.0,
    width: 1.5,
    label_offset: 12.0,
    font_size: 7.0,
    style: FontStyle::Normal,
};

/// Heading of family `index` out of `count`, evenly around the circle
/// starting straight down.
pub fn family_heading(index: usize, count: usize) -> f32 {
    360.0 / count as f32 * index as f32 - 90.0
}

/// Heading of child `index` out of `count` siblings fanned over `spread`
/// degrees around `parent`.
pub fn child_heading(parent: f32, spread: f32, index: usize, count: usize) -> f32 {
    parent + spread / (count + 1) as f32 * (index + 1) as f32 - spread / 2.0
}

/// Direction to push a label from its node so horizontal text stays on
/// the readable side: headings pointing left are turned around.
pub fn label_heading(heading: f32) -> f32 {
    let normalized = heading.rem_euclid(360.0);
    if normalized > 90.0 && normalized < 270.0 {
        heading + 180.0
    } else {
        heading
    }
}

/// The full draw list.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    items: Vec<Item>,
    families: usize,
}

impl Scene {
    /// Every element in drawing order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of families in the scene.
    pub fn family_count(&self) -> usize {
        self.families
    }

    /// Elements visible once the first `revealed` families are drawn.
    pub fn visible(&self, revealed: usize) -> impl Iterator<Item = &Item> {
        let finished = revealed >= self.families;
        self.items.iter().filter(move |item| match item.stage {
            Stage::Trunk => true,
            Stage::Family(i) => i < revealed,
            Stage::Finish => finished,
        })
    }

    /// Label texts of one node kind, in drawing order.
    pub fn labels(&self, kind: NodeKind) -> Vec<&str> {
        self.items
            .iter()
            .filter(|item| item.kind == kind)
            .filter_map(|item| match &item.element {
                Element::Label { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn push(&mut self, stage: Stage, kind: NodeKind, element: Element) {
        self.items.push(Item {
            stage,
            kind,
            element,
        });
    }

    /// Draw one branch with its label and return where it ends.
    #[allow(clippy::too_many_arguments)]
    fn branch(
        &mut self,
        stage: Stage,
        kind: NodeKind,
        level: &LevelStyle,
        from: Point,
        heading: f32,
        color: Rgb,
        text: &str,
    ) -> Point {
        let to = from.advance(heading, level.length);
        self.push(
            stage,
            kind,
            Element::Segment {
                from,
                to,
                width: level.width,
                color,
            },
        );
        if kind == NodeKind::Word {
            self.push(
                stage,
                kind,
                Element::Dot {
                    center: to,
                    diameter: WORD_DOT,
                    color,
                },
            );
        }
        self.push(
            stage,
            kind,
            Element::Label {
                text: text.to_string(),
                at: to.advance(label_heading(heading), level.label_offset),
                size: level.font_size,
                style: level.style,
                color,
            },
        );
        to
    }

    fn title(&mut self, text: String, y: f32, size: f32, style: FontStyle) {
        self.push(
            Stage::Finish,
            NodeKind::Title,
            Element::Label {
                text,
                at: Point::new(0.0, y),
                size,
                style,
                color: WHITE,
            },
        );
    }
}

/// Lay out the tree for `table`, with titles but without stars.
pub fn layout_tree(table: &[Family]) -> Scene {
    let mut scene = Scene {
        items: Vec::new(),
        families: table.len(),
    };

    let trunk_top = TRUNK_BASE.advance(90.0, TRUNK_LENGTH);
    scene.push(
        Stage::Trunk,
        NodeKind::Trunk,
        Element::Segment {
            from: TRUNK_BASE,
            to: trunk_top,
            width: TRUNK_WIDTH,
            color: TRUNK_COLOR,
        },
    );

    for (i, family) in table.iter().enumerate() {
        let stage = Stage::Family(i);
        let color = family.color;
        let heading = family_heading(i, table.len());
        let family_end = scene.branch(
            stage,
            NodeKind::Family,
            &FAMILY_LEVEL,
            trunk_top,
            heading,
            color,
            family.name,
        );

        let subs = family.subfamilies;
        for (j, sub) in subs.iter().enumerate() {
            let sub_heading = child_heading(heading, SUBFAMILY_LEVEL.spread, j, subs.len());
            let sub_end = scene.branch(
                stage,
                NodeKind::Subfamily,
                &SUBFAMILY_LEVEL,
                family_end,
                sub_heading,
                color,
                sub.name,
            );

            for (k, lang) in sub.languages.iter().enumerate() {
                let lang_heading =
                    child_heading(sub_heading, LANGUAGE_LEVEL.spread, k, sub.languages.len());
                let lang_end = scene.branch(
                    stage,
                    NodeKind::Language,
                    &LANGUAGE_LEVEL,
                    sub_end,
                    lang_heading,
                    color,
                    lang.name,
                );

                for (m, word) in lang.words.iter().enumerate() {
                    let word_heading =
                        child_heading(lang_heading, WORD_LEVEL.spread, m, lang.words.len());
                    scene.branch(
                        stage,
                        NodeKind::Word,
                        &WORD_LEVEL,
                        lang_end,
                        word_heading,
                        color,
                        word,
                    );
                }
            }
        }
    }

    scene.title(TITLE.to_string(), 650.0, 24.0, FontStyle::Bold);
    scene.title(
        format!("{} Languages • 4 Levels of Branching", count_languages(table)),
        620.0,
        12.0,
        FontStyle::Normal,
    );
    scene.title(SCROLL_HINT.to_string(), 595.0, 10.0, FontStyle::Italic);
    scene.title(LEGEND.to_string(), -850.0, 10.0, FontStyle::Italic);

    tracing::debug!(items = scene.items.len(), families = scene.families, "laid out tree");
    scene
}

/// Scatter `count` white stars over the canvas.
pub fn scatter_stars(scene: &mut Scene, rng: &mut StdRng, count: usize) {
    for _ in 0..count {
        let center = Point::new(
            rng.random_range(-1100..=1100) as f32,
            rng.random_range(-800..=600) as f32,
        );
        let diameter = rng.random_range(2..=4) as f32;
        scene.push(
            Stage::Finish,
            NodeKind::Star,
            Element::Dot {
                center,
                diameter,
                color: WHITE,
            },
        );
    }
}

/// The complete scene: tree, titles and stars.
pub fn build_scene(table: &[Family], rng: &mut StdRng) -> Scene {
    let mut scene = layout_tree(table);
    scatter_stars(&mut scene, rng, STAR_COUNT);
    scene
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng;

    use super::*;
    use crate::table::{LANGUAGES, count_words};

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
    }

    fn segments(scene: &Scene, kind: NodeKind) -> Vec<(Point, Point, f32, Rgb)> {
        scene
            .items()
            .iter()
            .filter(|item| item.kind == kind)
            .filter_map(|item| match item.element {
                Element::Segment {
                    from,
                    to,
                    width,
                    color,
                } => Some((from, to, width, color)),
                _ => None,
            })
            .collect()
    }

    fn dots(scene: &Scene, kind: NodeKind) -> Vec<(Point, f32, Rgb)> {
        scene
            .items()
            .iter()
            .filter(|item| item.kind == kind)
            .filter_map(|item| match item.element {
                Element::Dot {
                    center,
                    diameter,
                    color,
                } => Some((center, diameter, color)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn trunk_geometry() {
        let scene = layout_tree(LANGUAGES);
        let trunk = segments(&scene, NodeKind::Trunk);
        assert_eq!(trunk.len(), 1);
        let (from, to, width, color) = trunk[0];
        assert!(close(from, Point::new(0.0, -300.0)));
        assert!(close(to, Point::new(0.0, -180.0)));
        assert_eq!(width, 15.0);
        assert_eq!(color, TRUNK_COLOR);
    }

    #[test]
    fn first_family_points_down() {
        let scene = layout_tree(LANGUAGES);
        let families = segments(&scene, NodeKind::Family);
        let (from, to, width, color) = families[0];
        assert!(close(from, Point::new(0.0, -180.0)));
        assert!(close(to, Point::new(0.0, -300.0)));
        assert_eq!(width, 9.0);
        assert_eq!(color, LANGUAGES[0].color);
    }

    #[test]
    fn headings() {
        assert_eq!(family_heading(0, 11), -90.0);
        assert_eq!(family_heading(2, 4), 90.0);
        // two children over 80 degrees sit at -40/3 and +40/3
        assert!((child_heading(0.0, 80.0, 0, 2) + 40.0 / 3.0).abs() < 1e-4);
        assert!((child_heading(0.0, 80.0, 1, 2) - 40.0 / 3.0).abs() < 1e-4);
        // a single child continues straight on
        assert_eq!(child_heading(30.0, 70.0, 0, 1), 30.0);
    }

    #[test]
    fn labels_flip_when_pointing_left() {
        assert_eq!(label_heading(45.0), 45.0);
        assert_eq!(label_heading(90.0), 90.0);
        assert_eq!(label_heading(100.0), 280.0);
        assert_eq!(label_heading(270.0), 270.0);
        assert_eq!(label_heading(-100.0), 80.0);
        assert_eq!(label_heading(-90.0), -90.0);
    }

    #[test]
    fn family_label_sits_past_branch_end() {
        let scene = layout_tree(LANGUAGES);
        let label = scene
            .items()
            .iter()
            .find_map(|item| match &item.element {
                Element::Label {
                    text, at, size, style, ..
                } if text == "Indo-European" => Some((*at, *size, *style)),
                _ => None,
            })
            .unwrap();
        assert!(close(label.0, Point::new(0.0, -320.0)));
        assert_eq!(label.1, 11.0);
        assert_eq!(label.2, FontStyle::Bold);
    }

    #[test]
    fn words_end_in_family_coloured_dots() {
        let scene = layout_tree(LANGUAGES);
        let words = dots(&scene, NodeKind::Word);
        assert_eq!(words.len(), count_words(LANGUAGES));
        assert!(words.iter().all(|(_, d, _)| *d == WORD_DOT));

        let word_segments = segments(&scene, NodeKind::Word);
        for ((_, end, width, seg_color), (center, _, dot_color)) in word_segments.iter().zip(&words) {
            assert!(close(*end, *center));
            assert_eq!(*width, 1.5);
            assert_eq!(seg_color, dot_color);
        }
    }

    #[test]
    fn titles() {
        let scene = layout_tree(LANGUAGES);
        assert_eq!(
            scene.labels(NodeKind::Title),
            [
                TITLE,
                "96 Languages • 4 Levels of Branching",
                SCROLL_HINT,
                LEGEND,
            ]
        );
    }

    #[test]
    fn empty_table_draws_trunk_only() {
        let scene = layout_tree(&[]);
        assert_eq!(scene.family_count(), 0);
        assert_eq!(segments(&scene, NodeKind::Trunk).len(), 1);
        let tree_items = scene
            .items()
            .iter()
            .filter(|item| item.kind != NodeKind::Trunk && item.kind != NodeKind::Title)
            .count();
        assert_eq!(tree_items, 0);
        assert_eq!(scene.labels(NodeKind::Title)[1], "0 Languages • 4 Levels of Branching");
    }

    #[test]
    fn stars_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let scene = build_scene(LANGUAGES, &mut rng);
        let stars = dots(&scene, NodeKind::Star);
        assert_eq!(stars.len(), STAR_COUNT);
        for (center, diameter, color) in stars {
            assert!((-1100.0..=1100.0).contains(&center.x));
            assert!((-800.0..=600.0).contains(&center.y));
            assert!((2.0..=4.0).contains(&diameter));
            assert_eq!(color, WHITE);
        }
    }

    #[test]
    fn progressive_reveal() {
        let mut rng = StdRng::seed_from_u64(1);
        let scene = build_scene(&LANGUAGES[..3], &mut rng);

        let nothing: Vec<_> = scene.visible(0).collect();
        assert_eq!(nothing.len(), 1);
        assert_eq!(nothing[0].kind, NodeKind::Trunk);

        assert!(scene.visible(2).all(|item| match item.stage {
            Stage::Family(i) => i < 2,
            Stage::Trunk => true,
            Stage::Finish => false,
        }));

        assert_eq!(scene.visible(3).count(), scene.items().len());
        assert_eq!(scene.visible(usize::MAX).count(), scene.items().len());
    }

    proptest! {
        #[test]
        fn every_node_drawn_once(indices in prop::collection::vec(0usize..11, 0..6)) {
            let table: Vec<Family> = indices.iter().map(|&i| LANGUAGES[i]).collect();
            let scene = layout_tree(&table);

            let family_names: Vec<&str> = table.iter().map(|f| f.name).collect();
            let sub_names: Vec<&str> = table
                .iter()
                .flat_map(|f| f.subfamilies)
                .map(|s| s.name)
                .collect();
            let lang_names: Vec<&str> = table
                .iter()
                .flat_map(|f| f.subfamilies)
                .flat_map(|s| s.languages)
                .map(|l| l.name)
                .collect();
            let words: Vec<&str> = table
                .iter()
                .flat_map(|f| f.subfamilies)
                .flat_map(|s| s.languages)
                .flat_map(|l| l.words.iter().copied())
                .collect();

            prop_assert_eq!(scene.labels(NodeKind::Family), family_names);
            prop_assert_eq!(scene.labels(NodeKind::Subfamily), sub_names);
            prop_assert_eq!(scene.labels(NodeKind::Language), lang_names);
            prop_assert_eq!(scene.labels(NodeKind::Word), words);
            prop_assert_eq!(dots(&scene, NodeKind::Word).len(), count_words(&table));
        }

        #[test]
        fn branches_use_family_colour(index in 0usize..11) {
            let scene = layout_tree(&LANGUAGES[index..=index]);
            let color = LANGUAGES[index].color;
            for item in scene.items().iter().filter(|item| item.kind != NodeKind::Trunk) {
                if let Element::Segment { color: c, .. } = item.element {
                    prop_assert_eq!(c, color);
                }
            }
        }
    }
}
