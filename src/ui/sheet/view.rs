// SPDX-License-Identifier: MPL-2.0
//! Widget tree for a bottom sheet: backdrop, surface, drag handle, header.
//!
//! The view is generic over the host's message type; pointer interactions
//! on the chrome are routed back through `on_interaction` so the host can
//! feed them into its [`Controller`](super::Controller).

use super::controller::Controller;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, mouse_area, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, Element, Length, Point};

/// Pointer and chrome interactions a sheet surface can produce.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interaction {
    /// The dimmed area behind the sheet was tapped.
    BackdropPressed,
    /// A press began on the sheet surface.
    SurfacePressed,
    /// The pointer moved while over the sheet surface.
    SurfaceMoved(Point),
    /// The press on the sheet surface ended.
    SurfaceReleased,
    /// The header close button was pressed.
    ClosePressed,
}

/// Renders a sheet with its backdrop. Returns an empty element while the
/// controller is fully closed.
pub fn view<'a, M>(
    controller: &'a Controller,
    scheme: &ColorScheme,
    title: String,
    content: Element<'a, M>,
    on_interaction: impl Fn(Interaction) -> M + Clone + 'a,
) -> Element<'a, M>
where
    M: Clone + 'a,
{
    if !controller.is_visible() {
        return Space::new().into();
    }

    let props = controller.props();

    // Backdrop dims in proportion to how far the sheet is from open.
    let backdrop_alpha = scheme.backdrop.a * controller.backdrop_fraction();
    let backdrop_style = styles::backdrop(scheme, backdrop_alpha);
    let mut backdrop = mouse_area(
        Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| backdrop_style),
    );
    if props.dismiss_on_backdrop {
        backdrop = backdrop.on_press(on_interaction(Interaction::BackdropPressed));
    }

    let mut surface_column = Column::new().spacing(spacing::SM);

    if props.show_drag_handle {
        let handle_style = styles::drag_handle(scheme);
        surface_column = surface_column.push(
            Container::new(
                Container::new(Space::new())
                    .width(Length::Fixed(sizing::DRAG_HANDLE_WIDTH))
                    .height(Length::Fixed(sizing::DRAG_HANDLE_HEIGHT))
                    .style(move |_| handle_style),
            )
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .padding(spacing::XS),
        );
    }

    let scheme_clone = scheme.clone();
    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(title)
                .size(typography::TITLE)
                .color(scheme.text_primary),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            button(icons::sized(
                icons::close(),
                sizing::ICON_MD,
                scheme.text_secondary,
            ))
            .on_press(on_interaction(Interaction::ClosePressed))
            .padding(spacing::XXS)
            .style(move |_, status| styles::dismiss_button(&scheme_clone, status)),
        );

    surface_column = surface_column.push(header).push(content);

    // Dragging is rendered by shrinking the visible height from the bottom
    // edge, so the surface appears to slide off-screen.
    let visible_height = (props.height - controller.offset()).max(0.0);
    let bottom_inset = if props.keyboard_avoiding {
        sizing::KEYBOARD_INSET
    } else {
        0.0
    };

    let surface_style = styles::sheet_surface(scheme);
    let surface = Container::new(surface_column)
        .width(Length::Fill)
        .height(Length::Fixed(visible_height))
        .padding([spacing::SM, spacing::MD])
        .style(move |_| surface_style);

    let on_move = on_interaction.clone();
    let surface = mouse_area(surface)
        .on_press(on_interaction(Interaction::SurfacePressed))
        .on_release(on_interaction(Interaction::SurfaceReleased))
        .on_move(move |position| on_move(Interaction::SurfaceMoved(position)));

    let anchored = Column::new()
        .push(Space::new().height(Length::Fill))
        .push(surface)
        .push(Space::new().height(Length::Fixed(bottom_inset)));

    Stack::with_children(vec![backdrop.into(), anchored.into()])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
