// SPDX-License-Identifier: MPL-2.0
//! Navigation bar: screen tabs and the language selector.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::{
    alignment::Vertical,
    widget::{button, pick_list, Container, Row, Space, Text},
    Element, Length,
};
use unic_langid::LanguageIdentifier;

/// Tabs shown in the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Upload,
    Scene,
}

impl Tab {
    fn label_key(self) -> &'static str {
        match self {
            Tab::Upload => "nav-upload-tab",
            Tab::Scene => "nav-scene-tab",
        }
    }
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Tab,
}

#[derive(Debug, Clone)]
pub enum Message {
    TabPressed(Tab),
    LanguageSelected(LanguageIdentifier),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    SwitchTo(Tab),
    LanguageChanged(LanguageIdentifier),
}

/// Maps a navbar message to an event, dropping no-op selections.
pub fn update(message: Message, ctx: &ViewContext<'_>) -> Event {
    match message {
        Message::TabPressed(tab) if tab == ctx.active => Event::None,
        Message::TabPressed(tab) => Event::SwitchTo(tab),
        Message::LanguageSelected(locale) if &locale == ctx.i18n.current_locale() => Event::None,
        Message::LanguageSelected(locale) => Event::LanguageChanged(locale),
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let tabs = [Tab::Upload, Tab::Scene]
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |row, tab| {
            row.push(
                button(Text::new(ctx.i18n.tr(tab.label_key())).size(typography::BODY))
                    .on_press(Message::TabPressed(tab))
                    .padding([spacing::XS, spacing::MD])
                    .style(button_styles::tab(tab == ctx.active)),
            )
        });

    let language = pick_list(
        ctx.i18n.available_locales.as_slice(),
        Some(ctx.i18n.current_locale().clone()),
        Message::LanguageSelected,
    )
    .text_size(typography::BODY_SM);

    let bar = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(tabs)
        .push(Space::new().width(Length::Fill))
        .push(Text::new(ctx.i18n.tr("nav-language-label")).size(typography::BODY_SM))
        .push(language);

    Container::new(bar)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::MD])
        .into()
}
