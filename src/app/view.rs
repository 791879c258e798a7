// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The navbar sits above the active screen; toasts float over both.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::scene;
use crate::ui::navbar;
use crate::ui::notifications::{self, Toast};
use crate::ui::uploader;
use iced::{
    widget::{Column, Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub uploader: &'a uploader::State,
    pub scene: &'a scene::State,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Upload => uploader::view(ctx.uploader, uploader::ViewContext { i18n: ctx.i18n })
            .map(Message::Uploader),
        Screen::Scene => scene::view(ctx.scene, scene::ViewContext { i18n: ctx.i18n })
            .map(Message::Scene),
    };

    let navbar_view = navbar::view(navbar::ViewContext {
        i18n: ctx.i18n,
        active: ctx.screen.into(),
    })
    .map(Message::Navbar);

    let content = Column::new()
        .push(navbar_view)
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(content)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
