// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::breed_search;
use iced::{widget::Container, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub search: &'a breed_search::State,
    pub warning: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = breed_search::view(
        ctx.search,
        breed_search::ViewContext {
            i18n: ctx.i18n,
            warning: ctx.warning,
        },
    )
    .map(Message::BreedSearch);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
