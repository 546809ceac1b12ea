//! Animation controls: a single Play button and a year slider.

use crate::figure::{
    AnimateArgs, AnimationMode, AnimationOptions, Button, CurrentValue, Figure, Font, FrameTiming,
    MenuKind, Pad, Slider, SliderStep, Transition, UpdateMenu,
};

use super::types::{PLAY_FRAME_MS, PLAY_LABEL, SLIDER_FONT_PX, SLIDER_PREFIX};

/// Replace the animation menu with one Play button (no pause/stop) and add a
/// slider with one step per frame.
///
/// Play advances from the current frame every 500 ms and redraws each step.
/// Slider steps jump to their frame immediately.
pub fn apply_animation_controls(mut fig: Figure) -> Figure {
    let play = Button {
        args: AnimateArgs(
            None,
            AnimationOptions {
                frame: FrameTiming {
                    duration: PLAY_FRAME_MS,
                    redraw: true,
                },
                transition: Transition {
                    duration: PLAY_FRAME_MS,
                },
                fromcurrent: Some(true),
                mode: None,
            },
        ),
        label: PLAY_LABEL.into(),
        method: "animate".into(),
    };

    fig.layout.updatemenus = vec![UpdateMenu {
        kind: MenuKind::Buttons,
        buttons: vec![play],
        direction: "left".into(),
        pad: Pad {
            r: Some(10),
            t: Some(87),
        },
        showactive: false,
        x: 0.1,
        xanchor: "right".into(),
        y: 0.0,
        yanchor: "top".into(),
    }];

    let steps: Vec<SliderStep> = fig
        .frames
        .iter()
        .map(|f| SliderStep {
            args: AnimateArgs(
                Some(vec![f.name.clone()]),
                AnimationOptions {
                    frame: FrameTiming {
                        duration: 0,
                        redraw: true,
                    },
                    transition: Transition { duration: 0 },
                    fromcurrent: None,
                    mode: Some(AnimationMode::Immediate),
                },
            ),
            label: f.name.clone(),
            method: "animate".into(),
        })
        .collect();

    log::debug!("animation controls: 1 button, {} slider steps", steps.len());

    fig.layout.sliders = vec![Slider {
        active: 0,
        currentvalue: CurrentValue {
            prefix: SLIDER_PREFIX.into(),
            font: Font {
                color: None,
                size: Some(SLIDER_FONT_PX),
            },
        },
        pad: Pad { r: None, t: Some(50) },
        steps,
    }];
    fig
}
