// SPDX-License-Identifier: MPL-2.0
//! Iced rendering of the breed search view.

use super::snapshot::{error_label, image_label, results_label, tile_status_label};
use super::state::{BreedList, Message, ResultTile, State, TileImage};
use crate::domain::Breed;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{
    button, container, image, pick_list, scrollable, svg, Column, Container, Row, Text,
};
use iced::{alignment, ContentFit, Element, Length};

const PLACEHOLDER_SVG: &[u8] = include_bytes!("../../../assets/placeholder.svg");

/// Contextual data needed to render the view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Key of a startup warning to show above the form, if any.
    pub warning: Option<&'a str>,
}

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let mut content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .width(Length::Fill)
        .push(Text::new(i18n.tr("app-heading")).size(typography::TITLE_LG));

    if let Some(key) = ctx.warning {
        content = content.push(
            Text::new(i18n.tr(key))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
    }

    content = content.push(build_form(state, i18n));

    if let Some(status) = build_breed_list_status(state, i18n) {
        content = content.push(status);
    }

    if let Some((breed, error)) = state.failure() {
        content = content.push(
            Container::new(Text::new(error_label(i18n, breed, error)).size(typography::BODY))
                .padding(spacing::SM)
                .width(Length::Fill)
                .style(styles::container::error_banner),
        );
    }

    if state.is_loading() {
        content = content.push(Text::new(i18n.tr("search-loading")).size(typography::BODY_LG));
    }

    if state.shows_placeholder() {
        content = content.push(build_placeholder(i18n));
    }

    if let Some((breed, tiles)) = state.results() {
        content = content
            .push(Text::new(results_label(i18n, tiles.len())).size(typography::BODY_LG))
            .push(build_gallery(breed, tiles, i18n));
    }

    scrollable(content).height(Length::Fill).into()
}

/// Breed dropdown and Search button on one row.
fn build_form<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let selector = pick_list(
        state.breed_options(),
        state.selected().cloned(),
        Message::BreedSelected,
    )
    .placeholder(i18n.tr("breed-select-placeholder"))
    .width(sizing::SELECTOR_WIDTH);

    let search = button(Text::new(i18n.tr("search-button")))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .on_press_maybe(state.can_search().then_some(Message::SearchPressed));

    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(selector)
        .push(search)
        .into()
}

fn build_breed_list_status<'a>(state: &'a State, i18n: &'a I18n) -> Option<Element<'a, Message>> {
    match state.breeds() {
        BreedList::Ready(_) => None,
        BreedList::Loading => Some(
            Text::new(i18n.tr("breed-list-loading"))
                .size(typography::CAPTION)
                .into(),
        ),
        BreedList::Failed(error) => {
            let message = format!("{} {}", i18n.tr("breed-list-error"), i18n.tr(error.i18n_key()));
            let retry = button(Text::new(i18n.tr("breed-list-retry")).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .on_press(Message::RetryBreeds);
            Some(
                Row::new()
                    .spacing(spacing::XS)
                    .align_y(alignment::Vertical::Center)
                    .push(Text::new(message).size(typography::CAPTION))
                    .push(retry)
                    .into(),
            )
        }
    }
}

fn build_placeholder(i18n: &I18n) -> Element<'_, Message> {
    let picture = svg(svg::Handle::from_memory(PLACEHOLDER_SVG))
        .width(sizing::PLACEHOLDER_WIDTH)
        .content_fit(ContentFit::Contain);

    Column::new()
        .spacing(spacing::XXS)
        .push(picture)
        .push(Text::new(i18n.tr("placeholder-image-label")).size(typography::CAPTION))
        .into()
}

fn build_gallery<'a>(
    breed: &'a Breed,
    tiles: &'a [ResultTile],
    i18n: &'a I18n,
) -> Element<'a, Message> {
    Row::with_children(tiles.iter().map(|tile| build_tile(breed, tile, i18n)))
        .spacing(spacing::SM)
        .wrap()
        .vertical_spacing(spacing::SM)
        .into()
}

fn build_tile<'a>(breed: &Breed, tile: &'a ResultTile, i18n: &I18n) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match &tile.image {
        TileImage::Ready(handle) => image(handle.clone())
            .width(sizing::TILE_SIZE)
            .height(sizing::TILE_SIZE)
            .content_fit(ContentFit::Cover)
            .into(),
        pending_or_missing => Container::new(
            Text::new(tile_status_label(i18n, pending_or_missing).unwrap_or_default())
                .size(typography::CAPTION),
        )
        .width(sizing::TILE_SIZE)
        .height(sizing::TILE_SIZE)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into(),
    };

    let caption = Text::new(image_label(i18n, breed, tile.position)).size(typography::CAPTION);

    container(
        Column::new()
            .spacing(spacing::XXS)
            .align_x(alignment::Horizontal::Center)
            .push(picture)
            .push(caption),
    )
    .padding(spacing::XS)
    .style(styles::container::tile)
    .into()
}
