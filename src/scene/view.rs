// SPDX-License-Identifier: MPL-2.0
//! Scene surface rendering: the cube shader with a viewer status overlay.

use super::{Message, SceneContext, State, ViewerStatus};
use crate::domain::scene::SplatKind;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::container as container_styles;
use crate::ui::widgets::CubeShader;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{text, Column, Container, Space, Stack, Text},
    Element, Length,
};
use std::path::Path;

/// Contextual data needed to render the scene.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Render the scene surface, or an empty area when stopped.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let Some(context) = state.context() else {
        return Space::new().width(Length::Fill).height(Length::Fill).into();
    };

    let surface = Container::new(CubeShader::new(*context.camera(), *context.cube()).view())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(container_styles::scene_surface);

    let overlay = Container::new(status_overlay(context, &ctx))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(Horizontal::Left)
        .align_y(Vertical::Top);

    Stack::new().push(surface).push(overlay).into()
}

fn status_overlay<'a>(context: &'a SceneContext, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let (headline, detail, is_error) = match context.viewer_status() {
        ViewerStatus::Unbound => (ctx.i18n.tr("scene-status-unbound"), None, false),
        ViewerStatus::Loading(path) => (
            ctx.i18n
                .tr_with_args("scene-status-loading", &[("file", &file_label(path))]),
            None,
            false,
        ),
        ViewerStatus::Running(scene) => {
            let kind = ctx.i18n.tr(match scene.kind {
                SplatKind::Gaussians => "scene-kind-gaussians",
                SplatKind::PointCloud => "scene-kind-point-cloud",
            });
            let count = scene.splat_count.to_string();
            (
                ctx.i18n.tr_with_args(
                    "scene-status-running",
                    &[
                        ("file", &file_label(&scene.path)),
                        ("count", &count),
                        ("kind", &kind),
                    ],
                ),
                None,
                false,
            )
        }
        ViewerStatus::Failed(error) => (
            ctx.i18n.tr("scene-status-failed"),
            Some(format!("{} ({error})", ctx.i18n.tr(error.i18n_key()))),
            true,
        ),
    };

    let mut content = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(headline).size(typography::BODY));

    if let Some(detail) = detail {
        content = content.push(
            text(detail)
                .size(typography::CAPTION)
                .color(palette::ERROR_500),
        );
    }

    Container::new(content)
        .padding(spacing::SM)
        .max_width(sizing::OVERLAY_MAX_WIDTH)
        .style(container_styles::scene_status(is_error))
        .into()
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}
