//! Dispatch of protocol commands to a painting session

use glam::Vec3;
use painting::{ApplyOutcome, HistoryState, PaintingSession, Rgba, SurfaceHit};
use skinbox_ipc::{EngineCommand, EngineEvent, PaintTarget};
use tracing::debug;

/// Turns commands into session calls and session changes into events.
///
/// History availability is reported only between gestures, so a host does
/// not see undo flicker on for a gesture that ends up changing nothing.
pub struct CommandDispatcher {
    reported: HistoryState,
}

impl CommandDispatcher {
    pub fn new(session: &PaintingSession) -> Self {
        Self {
            reported: session.history_state(),
        }
    }

    /// Run one command against the session and collect the events it causes.
    pub fn dispatch(&mut self, session: &mut PaintingSession, command: EngineCommand) -> Vec<EngineEvent> {
        let mut events = apply_command(session, command);

        if let Some(rect) = session.take_dirty() {
            events.push(EngineEvent::TextureDirty { rect });
        }
        if !session.is_gesturing() {
            let state = session.history_state();
            if state != self.reported {
                self.reported = state;
                events.push(EngineEvent::HistoryChanged {
                    can_undo: state.can_undo,
                    can_redo: state.can_redo,
                });
            }
        }
        events
    }
}

fn apply_command(session: &mut PaintingSession, command: EngineCommand) -> Vec<EngineEvent> {
    let mut events = Vec::new();
    debug!("dispatch: {:?}", command);

    match command {
        EngineCommand::SetColor { color } => session.set_color(Rgba::from_array(color)),
        EngineCommand::SetRadius { radius } => session.set_radius(radius),
        EngineCommand::SetLayer { layer } => session.set_layer(layer),
        EngineCommand::SetTool { tool } => session.set_tool(tool),
        EngineCommand::SetMirror { enabled } => session.set_mirror(enabled),
        EngineCommand::SetIsolation { parts } => session.set_isolation(parts),
        EngineCommand::BeginGesture => session.begin_gesture(),
        EngineCommand::EndGesture => {
            session.end_gesture();
        }
        EngineCommand::CancelGesture => session.cancel_gesture(),
        EngineCommand::Apply { target } => {
            let outcome = match target {
                PaintTarget::Pixel { x, y } => session.apply_at_pixel(x, y),
                PaintTarget::Hit { part, point, normal } => {
                    session.apply_at_hit(&SurfaceHit::new(part, Vec3::from(point), Vec3::from(normal)))
                }
                PaintTarget::Ray { origin, direction } => {
                    session.apply_along_ray(Vec3::from(origin), Vec3::from(direction))
                }
            };
            if let ApplyOutcome::Picked(color) = outcome {
                events.push(EngineEvent::ColorPicked {
                    color: color.to_array(),
                });
            }
        }
        EngineCommand::Undo => {
            if !session.undo() {
                events.push(notice("Nothing to undo"));
            }
        }
        EngineCommand::Redo => {
            if !session.redo() {
                events.push(notice("Nothing to redo"));
            }
        }
        EngineCommand::MirrorLayer { layer } => {
            session.mirror_layer(layer);
        }
        EngineCommand::ClearLayer { layer } => {
            session.clear_layer(layer);
        }
    }
    events
}

fn notice(message: &str) -> EngineEvent {
    EngineEvent::Notice {
        message: message.to_string(),
    }
}
