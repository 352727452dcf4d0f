use std::f32::consts::PI;

use crate::config::BoardSettings;
use crate::dom::Dom;
use crate::search::ResultItem;
use crate::world::{Body, BodyKind, Category};

use super::BodyMetadata;

/// Dynamic rectangle for one result item plus its projection element.
///
/// The element's DOM id equals the item identifier so hover dispatch can map
/// it back to the owning body.
pub fn create_result_body(
    dom: &mut Dom,
    settings: &BoardSettings,
    x: f32,
    y: f32,
    item: ResultItem,
) -> (Body, BodyMetadata) {
    let width = settings.item_width;
    let height = settings.item_height;

    let element = dom.create_element();
    dom.set_dom_id(element, item.object_id.clone());
    dom.set_style(element, "--width", format!("{width}px"));
    dom.set_style(element, "--height", format!("{height}px"));
    if let Some(poster) = &item.poster_path {
        dom.set_style(
            element,
            "--image-url",
            format!("url(https://image.tmdb.org/t/p/w94_and_h141_bestv2{poster})"),
        );
    }
    dom.add_class(element, "hit");
    dom.add_class(element, "hit-result");

    let body = Body::rectangle(BodyKind::ResultItem, x, y, width, height)
        .with_friction(1.0)
        .with_filter(Category::RESULT_ITEM, Category::COLLIDE_ALL);

    let metadata = BodyMetadata {
        element,
        width,
        height,
        item: Some(item),
    };

    (body, metadata)
}

/// Dummy body for a grid cell with no item behind it. Never rendered, never
/// registered; the lifecycle manager purges these right after the layout pass.
pub fn create_placeholder(x: f32, y: f32) -> Body {
    Body::rectangle(BodyKind::Placeholder, x, y, 1.0, 1.0)
}

/// Single oversized, pre-rotated body shown when a query matches nothing.
pub fn create_no_results_body(dom: &mut Dom, settings: &BoardSettings) -> (Body, BodyMetadata) {
    let width = settings.no_results_width;
    let height = settings.no_results_height;

    let element = dom.create_element();
    dom.set_style(element, "--width", format!("{width}px"));
    dom.set_style(element, "--height", format!("{height}px"));
    dom.add_class(element, "hit");
    dom.add_class(element, "hit-no-results");
    dom.set_text(element, "NO RESULTS");

    let body = Body::rectangle(
        BodyKind::NoResults,
        settings.world_width() / 2.0 - 50.0,
        settings.spawn_y(),
        width,
        height,
    )
    .with_angle(-PI / 6.0)
    .with_friction(1.0)
    .with_filter(Category::RESULT_ITEM, Category::COLLIDE_ALL);

    let metadata = BodyMetadata {
        element,
        width,
        height,
        item: None,
    };

    (body, metadata)
}
