// SPDX-License-Identifier: MPL-2.0
//! Upload form rendering.

use super::{Message, State};
use crate::domain::upload::ReconstructionMethod;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::{
    alignment::Horizontal,
    widget::{button, pick_list, progress_bar, text, text_input, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the upload form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Render the upload form.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let form = Column::new()
        .spacing(spacing::LG)
        .width(Length::Fill)
        .push(Text::new(ctx.i18n.tr("upload-title")).size(typography::TITLE_MD))
        .push(email_field(state, &ctx))
        .push(method_field(state, &ctx))
        .push(video_field(state, &ctx))
        .push(submit_button(state, &ctx));

    let card = Container::new(form)
        .max_width(sizing::FORM_MAX_WIDTH)
        .padding(spacing::LG)
        .style(container_styles::card);

    Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(Horizontal::Center)
        .into()
}

fn email_field<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let input = text_input(&ctx.i18n.tr("upload-email-placeholder"), state.email())
        .on_input(Message::EmailChanged)
        .padding(spacing::XS)
        .size(typography::BODY);

    let mut field = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr("upload-email-label")).size(typography::BODY))
        .push(input);

    if let Some(key) = state.email_error() {
        field = field.push(
            text(ctx.i18n.tr(key))
                .size(typography::BODY_SM)
                .color(palette::ERROR_500),
        );
    }

    field.into()
}

fn method_field<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let select = pick_list(
        ReconstructionMethod::ALL,
        state.selected_method(),
        Message::MethodSelected,
    )
    .placeholder(ctx.i18n.tr("upload-method-placeholder"))
    .width(Length::Fill);

    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr("upload-method-label")).size(typography::BODY))
        .push(select)
        .into()
}

fn video_field<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut field = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr("upload-video-label")).size(typography::BODY));

    match (state.video(), state.preview()) {
        (Some(video), Some(_)) => {
            let details = Column::new()
                .spacing(spacing::XXS)
                .push(Text::new(video.file_name()).size(typography::BODY_LG))
                .push(
                    text(format!(
                        "{} · {}",
                        video.media_type(),
                        format_size(video.size_bytes())
                    ))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
                )
                .push(
                    button(text(ctx.i18n.tr("upload-preview-open")).size(typography::CAPTION))
                        .on_press(Message::OpenPreview)
                        .padding([spacing::XXS, spacing::XS])
                        .style(button_styles::secondary),
                );

            let remove = button(Text::new("✕").size(typography::BODY))
                .on_press(Message::RemoveFile)
                .style(button_styles::secondary);

            let card = Row::new()
                .spacing(spacing::SM)
                .push(Container::new(details).width(Length::Fill))
                .push(remove);

            field = field.push(
                Container::new(card)
                    .padding(spacing::SM)
                    .width(Length::Fill)
                    .style(container_styles::preview),
            );
        }
        _ => {
            let drop_zone = Column::new()
                .spacing(spacing::XS)
                .width(Length::Fill)
                .align_x(Horizontal::Center)
                .push(Text::new("⬆").size(sizing::DROP_GLYPH))
                .push(
                    text(ctx.i18n.tr("upload-video-drop-hint"))
                        .size(typography::BODY_SM)
                        .color(palette::GRAY_400),
                );

            field = field.push(
                button(drop_zone)
                    .on_press(Message::BrowseRequested)
                    .padding(spacing::MD)
                    .width(Length::Fill)
                    .style(button_styles::secondary),
            );
        }
    }

    let progress = state.upload_progress();
    if progress.is_partial() {
        let percent = progress.value().to_string();
        field = field
            .push(progress_bar(0.0..=1.0, progress.as_fraction()))
            .push(
                Container::new(
                    text(ctx.i18n.tr_with_args(
                        "upload-progress-label",
                        &[("percent", &percent)],
                    ))
                    .size(typography::BODY_SM)
                    .color(palette::GRAY_400),
                )
                .width(Length::Fill)
                .align_x(Horizontal::Center),
            );
    }

    field.into()
}

fn submit_button<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    button(
        Container::new(Text::new(ctx.i18n.tr("upload-submit-button")))
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .on_press_maybe(state.is_submit_enabled().then_some(Message::Submit))
    .width(Length::Fill)
    .style(button_styles::primary)
    .into()
}

/// Formats a byte count with a binary unit.
#[allow(clippy::cast_precision_loss)] // Display only
fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}
