//! The color picker widget core.
//!
//! [`ColorPicker`] owns one [`Color`] and everything that reacts to it: the
//! values text, the optional bound field, the drag and visibility state, and
//! the change callback. It draws nothing. A host feeds it events through
//! [`ColorPicker::handle_event`] (or the individual operations) and reads back
//! text, gradient stops and handle offsets to render.
//!
//! Every color mutation goes through the same path: clamp, refresh the values
//! text, sync the bound field if live syncing is on, then notify the change
//! callback.

use chroma_core::gradient::{self, GradientStop, STOP_COUNT};
use chroma_core::parse::{numeric_tokens, NumericToken};
use chroma_core::{clamp, format_color, parse_color, Channel, Color, DisplayFormat, Point};
use chroma_input::{
    is_activating_press, Event, EventResult, EventTarget, KeyCode, KeyEvent, KeyModifiers,
    PointerButton, PointerEvent, PointerEventKind, ScrollDirection, ScrollEvent,
};
use smallvec::SmallVec;

use crate::change::{ChangeCallback, ColorChange};
use crate::control::{ControlKind, ControlLayout, HandleOffset};
use crate::error::{PickerError, Result};
use crate::options::PickerOptions;
use crate::state::{DragState, Visibility};

/// Multiplier applied to every step while Shift is held.
const SHIFT_MULTIPLIER: f64 = 10.0;

/// Step for alpha nudges.
const ALPHA_STEP: f64 = 0.01;

/// A headless color picker.
///
/// # Example
///
/// ```
/// use chroma_core::Color;
/// use chroma_input::{Event, EventTarget, PointerButton, PointerEvent};
/// use chroma_picker::{ColorPicker, ControlLayout, PickerOptions};
///
/// let layout = ControlLayout::default();
/// let mut picker = ColorPicker::new(PickerOptions::default()).with_layout(layout);
/// picker.bind("hsla(0, 100%, 50%, 1)").unwrap();
///
/// // Open the picker, then click the middle of the hue strip.
/// let press_bound = Event::from(PointerEvent::down(PointerButton::Left, 0, 0));
/// picker.handle_event(EventTarget::Bound, &press_bound).unwrap();
/// let hue = layout.hue;
/// let press_hue = Event::from(PointerEvent::down(
///     PointerButton::Left,
///     hue.x + hue.width as i32 / 2,
///     hue.y,
/// ));
/// picker.handle_event(EventTarget::Picker, &press_hue).unwrap();
///
/// assert_eq!(picker.color().hue(), 180);
/// assert_eq!(picker.values_text(), "hsla(180, 100%, 50%, 1)");
/// ```
pub struct ColorPicker {
    /// The current color.
    color: Color,
    /// Color saved when the picker was last shown.
    snapshot: Option<Color>,
    /// Current display format of the values field.
    display: DisplayFormat,
    /// Behavior switches.
    options: PickerOptions,
    /// Control rectangles.
    layout: ControlLayout,
    /// Pointer drag state.
    drag: DragState,
    /// Panel visibility.
    visibility: Visibility,
    /// Text of the picker's own values field.
    values_text: String,
    /// Text of the bound host field, if one is attached.
    bound_value: Option<String>,
    /// Change callback.
    on_change: Option<ChangeCallback>,
}

impl std::fmt::Debug for ColorPicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorPicker")
            .field("color", &self.color)
            .field("snapshot", &self.snapshot)
            .field("display", &self.display)
            .field("options", &self.options)
            .field("layout", &self.layout)
            .field("drag", &self.drag)
            .field("visibility", &self.visibility)
            .field("values_text", &self.values_text)
            .field("bound_value", &self.bound_value)
            .field("on_change", &self.on_change.as_ref().map(|_| "<callback>"))
            .finish()
    }
}

impl Default for ColorPicker {
    fn default() -> Self {
        Self::new(PickerOptions::default())
    }
}

impl ColorPicker {
    /// Creates a hidden picker showing the default color.
    pub fn new(options: PickerOptions) -> Self {
        let color = Color::default();
        Self {
            color,
            snapshot: None,
            display: options.display,
            options,
            layout: ControlLayout::default(),
            drag: DragState::Idle,
            visibility: Visibility::Hidden,
            values_text: format_color(&color, options.display),
            bound_value: None,
            on_change: None,
        }
    }

    /// Sets the control layout.
    pub fn with_layout(mut self, layout: ControlLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Sets the initial color without notifying.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self.refresh_values_text();
        self
    }

    /// Sets the change callback.
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(&ColorChange) + Send + Sync + 'static,
    {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Replaces the change callback.
    pub fn set_on_change<F>(&mut self, callback: F)
    where
        F: Fn(&ColorChange) + Send + Sync + 'static,
    {
        self.on_change = Some(Box::new(callback));
    }

    /// Attaches a bound field holding `initial`.
    ///
    /// Non-empty initial text is parsed as the starting color. If it is not a
    /// color the field is still attached and the error is returned.
    pub fn bind(&mut self, initial: impl Into<String>) -> Result<()> {
        let initial = initial.into();
        let has_value = !initial.trim().is_empty();
        self.bound_value = Some(initial.clone());
        if has_value {
            self.apply_text(&initial)?;
        }
        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The current color.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// The color saved when the picker was last shown.
    #[inline]
    pub fn snapshot(&self) -> Option<Color> {
        self.snapshot
    }

    /// The current display format.
    #[inline]
    pub fn display(&self) -> DisplayFormat {
        self.display
    }

    /// The options the picker was created with.
    #[inline]
    pub fn options(&self) -> &PickerOptions {
        &self.options
    }

    /// The control layout.
    #[inline]
    pub fn layout(&self) -> &ControlLayout {
        &self.layout
    }

    /// Replaces the control layout, e.g. after the host re-laid out the page.
    pub fn set_layout(&mut self, layout: ControlLayout) {
        self.layout = layout;
    }

    /// The drag state.
    #[inline]
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// The panel visibility.
    #[inline]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Returns true when the panel is shown.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.visibility.is_active()
    }

    /// Text of the picker's values field.
    #[inline]
    pub fn values_text(&self) -> &str {
        &self.values_text
    }

    /// Text of the bound field, or `None` when no field is attached.
    #[inline]
    pub fn bound_value(&self) -> Option<&str> {
        self.bound_value.as_deref()
    }

    /// The current color in every representation.
    pub fn change(&self) -> ColorChange {
        ColorChange::from(self.color)
    }

    // ========================================================================
    // Rendering data
    // ========================================================================

    /// Stops of the hue strip.
    pub fn hue_gradient(&self) -> [GradientStop; STOP_COUNT] {
        gradient::hue_gradient(&self.color, self.options.change_hue)
    }

    /// Stops of the alpha strip.
    pub fn alpha_gradient(&self) -> [GradientStop; STOP_COUNT] {
        gradient::alpha_gradient(&self.color)
    }

    /// Opacity of the saturation/lightness square.
    pub fn sat_light_opacity(&self) -> f32 {
        gradient::sat_light_opacity(&self.color, self.options.change_with_alpha)
    }

    /// Color of the saturation/lightness square at a page point.
    pub fn sat_light_color_at(&self, point: Point) -> Color {
        let rect = self.layout.sat_light;
        gradient::sat_light_color_at(self.color.hue(), rect.sample(point), rect.size())
    }

    /// Where a control's handle sits for the current color.
    pub fn handle_offset(&self, kind: ControlKind) -> Option<HandleOffset> {
        self.layout.handle_offset(kind, &self.color)
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Replaces the color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        self.commit();
    }

    /// Shows the panel and snapshots the current color.
    ///
    /// Showing an already active picker takes a new snapshot.
    pub fn show(&mut self) {
        self.visibility = Visibility::Active;
        self.snapshot = Some(self.color);
        tracing::debug!(color = %self.color, "picker shown");
    }

    /// Hides the panel, keeping the current color.
    ///
    /// When the bound field is synced on close it receives the formatted
    /// value. Returns `false` if the panel was already hidden.
    pub fn hide(&mut self) -> bool {
        if !self.visibility.is_active() {
            return false;
        }
        self.visibility = Visibility::Hidden;
        self.drag = DragState::Idle;
        if self.options.syncs_bound_on_close() {
            self.write_bound();
        }
        tracing::debug!(color = %self.color, "picker hidden");
        true
    }

    /// Hides the panel and restores the snapshot.
    ///
    /// The bound field is only written if it is synced live.
    pub fn cancel(&mut self) {
        self.visibility = Visibility::Hidden;
        self.drag = DragState::Idle;
        match self.snapshot {
            Some(snapshot) => {
                tracing::debug!(restored = %snapshot, discarded = %self.color, "picker cancelled");
                self.color = snapshot;
                self.commit();
            }
            None => tracing::debug!("picker cancelled without snapshot"),
        }
    }

    /// Restores the snapshot without changing visibility.
    pub fn revert(&mut self) -> Result<()> {
        let snapshot = self.snapshot.ok_or(PickerError::NoSnapshot)?;
        self.color = snapshot;
        self.commit();
        Ok(())
    }

    /// Advances the display format (hsl → rgb → hex → hsl).
    pub fn cycle_display(&mut self) -> DisplayFormat {
        self.display = self.display.next();
        self.refresh_values_text();
        tracing::debug!(display = %self.display, "display format changed");
        self.display
    }

    /// Handles a press on the picker panel at `point`.
    ///
    /// A primary press on the hue strip, the saturation/lightness square or
    /// the alpha strip applies the value under the pointer and starts a drag.
    /// A press on the preview cycles the display format.
    pub fn pointer_down(&mut self, point: Point, button: PointerButton) -> EventResult {
        match self.layout.hit_test(point) {
            Some(ControlKind::Preview) if !button.is_secondary() => {
                self.cycle_display();
                EventResult::Handled
            }
            Some(kind) if kind.is_draggable() && button == PointerButton::Left => {
                self.drag = self.drag.press(Some(kind));
                tracing::debug!(control = %kind, "drag started");
                self.layout.apply_pointer(kind, point, &mut self.color);
                self.commit();
                EventResult::Handled
            }
            _ => EventResult::Ignored,
        }
    }

    /// Handles pointer motion anywhere on the page.
    pub fn pointer_move(&mut self, point: Point) -> EventResult {
        let Some(kind) = self.drag.control() else {
            return EventResult::Ignored;
        };
        self.layout.apply_pointer(kind, point, &mut self.color);
        tracing::trace!(
            control = %kind,
            x = point.x,
            y = point.y,
            color = %self.color,
            "drag moved"
        );
        self.commit();
        EventResult::Handled
    }

    /// Handles a button release anywhere on the page.
    pub fn pointer_up(&mut self) -> EventResult {
        let was_dragging = self.drag.is_dragging();
        if let Some(kind) = self.drag.control() {
            tracing::debug!(control = %kind, "drag ended");
        }
        self.drag = self.drag.release();
        was_dragging.into()
    }

    /// Adjusts a control's value by one wheel step.
    ///
    /// Hue and lightness move by 1, alpha by 0.01, times ten with Shift. On
    /// the saturation/lightness square Alt redirects the step to saturation.
    pub fn scroll_control(
        &mut self,
        kind: ControlKind,
        direction: ScrollDirection,
        modifiers: KeyModifiers,
    ) -> EventResult {
        let multiplier = step_multiplier(modifiers);
        let delta = direction.sign() * multiplier;

        match kind {
            ControlKind::Preview => return EventResult::Ignored,
            ControlKind::Hue => self.color.set_hue(f64::from(self.color.hue()) + delta),
            ControlKind::Alpha => self
                .color
                .set_alpha(f64::from(self.color.alpha()) + delta * ALPHA_STEP),
            ControlKind::SatLight if modifiers.contains(KeyModifiers::ALT) => self
                .color
                .set_saturation(f64::from(self.color.saturation()) + delta),
            ControlKind::SatLight => self
                .color
                .set_lightness(f64::from(self.color.lightness()) + delta),
        }
        self.commit();
        EventResult::Handled
    }

    /// Steps the number under `cursor` in the values field.
    ///
    /// Only active in the `hsl` display format. Hue, saturation and lightness
    /// step by 1 and alpha by 0.01, times ten with Shift. All numbers in the
    /// field are then applied; if the field has no alpha the current alpha is
    /// kept. Returns `false` when nothing changed.
    pub fn nudge_values(
        &mut self,
        cursor: usize,
        direction: ScrollDirection,
        modifiers: KeyModifiers,
    ) -> Result<bool> {
        if self.display != DisplayFormat::Hsl {
            return Ok(false);
        }

        let tokens = numeric_tokens(&self.values_text);
        if tokens.len() < 3 {
            return Ok(false);
        }
        let index = token_at_cursor(&tokens, cursor);
        let Some(&channel) = Channel::ALL.get(index) else {
            return Ok(false);
        };

        let mut values = tokens
            .iter()
            .take(Channel::ALL.len())
            .map(NumericToken::value)
            .collect::<std::result::Result<SmallVec<[f64; 4]>, _>>()?;

        let multiplier = step_multiplier(modifiers) * direction.sign();
        values[index] = match channel {
            Channel::Alpha => values[index] + ALPHA_STEP * multiplier,
            _ => values[index].trunc() + multiplier,
        };
        values[index] = clamp(values[index], 0.0, channel.max());

        let alpha = values
            .get(3)
            .copied()
            .unwrap_or_else(|| f64::from(self.color.alpha()));
        self.color = Color::new(values[0], values[1], values[2], alpha);
        tracing::trace!(%channel, color = %self.color, "values field nudged");
        drop(tokens);
        self.commit();
        Ok(true)
    }

    /// Handles the user replacing the values field text.
    ///
    /// On success the color and display format follow the text. On error the
    /// field keeps the typed text and the color is unchanged.
    pub fn input_values_text(&mut self, text: &str) -> Result<()> {
        self.values_text = text.to_string();
        self.apply_text(text)
    }

    /// Handles the user replacing the bound field text.
    pub fn input_bound_text(&mut self, text: &str) -> Result<()> {
        self.bound_value = Some(text.to_string());
        self.apply_text(text)
    }

    // ========================================================================
    // Event routing
    // ========================================================================

    /// Routes an event to the matching operation.
    ///
    /// | Target         | Event                 | Effect                                   |
    /// |----------------|-----------------------|------------------------------------------|
    /// | bound          | press (not secondary) | show if hidden                           |
    /// | picker         | press                 | preview cycle, or value + drag start     |
    /// | outside        | press                 | hide                                     |
    /// | any            | move / drag           | update the dragged control               |
    /// | any            | release               | end the drag                             |
    /// | bound / picker | Enter / Escape        | show / cancel                            |
    /// | values field   | Up / Down / wheel     | nudge the number under the cursor        |
    /// | picker         | wheel                 | step the control under the pointer       |
    /// | values / bound | text                  | parse and apply                          |
    ///
    /// Errors come only from text that is not a color (typed, or nudged
    /// while containing a malformed number); the picker state is unchanged.
    pub fn handle_event(&mut self, target: EventTarget, event: &Event) -> Result<EventResult> {
        tracing::trace!(%target, %event, "picker event");
        match event {
            Event::Pointer(pointer) => Ok(self.handle_pointer(target, pointer)),
            Event::Key(key) => self.handle_key(target, key),
            Event::Scroll(scroll) => self.handle_scroll(target, scroll),
            Event::Text(text) => match target {
                EventTarget::ValuesField { .. } => {
                    self.input_values_text(text)?;
                    Ok(EventResult::Handled)
                }
                EventTarget::Bound => {
                    self.input_bound_text(text)?;
                    Ok(EventResult::Handled)
                }
                EventTarget::Picker | EventTarget::Outside => Ok(EventResult::Ignored),
            },
        }
    }

    fn handle_pointer(&mut self, target: EventTarget, pointer: &PointerEvent) -> EventResult {
        match pointer.kind {
            PointerEventKind::Down(button) => match target {
                EventTarget::Bound => {
                    if !is_activating_press(pointer) {
                        return EventResult::Ignored;
                    }
                    if !self.visibility.is_active() {
                        self.show();
                    }
                    EventResult::Handled
                }
                EventTarget::Picker => {
                    // Presses inside the panel never close it.
                    self.pointer_down(pointer.position, button);
                    EventResult::Handled
                }
                EventTarget::ValuesField { .. } => EventResult::Handled,
                EventTarget::Outside => self.hide().into(),
            },
            PointerEventKind::Drag(_) | PointerEventKind::Moved => {
                self.pointer_move(pointer.position)
            }
            PointerEventKind::Up(_) => self.pointer_up(),
        }
    }

    fn handle_key(&mut self, target: EventTarget, key: &KeyEvent) -> Result<EventResult> {
        if target == EventTarget::Outside {
            return Ok(EventResult::Ignored);
        }
        match key.code {
            KeyCode::Enter => {
                self.show();
                Ok(EventResult::Handled)
            }
            KeyCode::Esc => {
                self.cancel();
                Ok(EventResult::Handled)
            }
            code => match (target, code.vertical_step()) {
                (EventTarget::ValuesField { cursor }, Some(step)) => {
                    let direction = if step > 0 {
                        ScrollDirection::Up
                    } else {
                        ScrollDirection::Down
                    };
                    Ok(self.nudge_values(cursor, direction, key.modifiers)?.into())
                }
                _ => Ok(EventResult::Ignored),
            },
        }
    }

    fn handle_scroll(&mut self, target: EventTarget, scroll: &ScrollEvent) -> Result<EventResult> {
        match target {
            EventTarget::Picker => match self.layout.hit_test(scroll.position) {
                Some(kind) => Ok(self.scroll_control(kind, scroll.direction, scroll.modifiers)),
                None => Ok(EventResult::Ignored),
            },
            EventTarget::ValuesField { cursor } => Ok(self
                .nudge_values(cursor, scroll.direction, scroll.modifiers)?
                .into()),
            EventTarget::Bound | EventTarget::Outside => Ok(EventResult::Ignored),
        }
    }

    // ========================================================================
    // Internal
    // ========================================================================

    /// Parses `text` and applies it, or leaves the color unchanged.
    fn apply_text(&mut self, text: &str) -> Result<()> {
        match parse_color(text) {
            Ok(parsed) => {
                self.color = parsed.color;
                self.display = parsed.format;
                self.commit();
                Ok(())
            }
            Err(err) => {
                tracing::warn!(input = text, error = %err, "rejected color input");
                Err(err.into())
            }
        }
    }

    fn refresh_values_text(&mut self) {
        self.values_text = format_color(&self.color, self.display);
    }

    fn write_bound(&mut self) {
        if let Some(bound) = self.bound_value.as_mut() {
            *bound = format_color(&self.color, self.display);
        }
    }

    /// Propagates a color change to the text fields and the callback.
    fn commit(&mut self) {
        self.refresh_values_text();
        if self.options.syncs_bound_live() {
            self.write_bound();
        }
        if let Some(ref callback) = self.on_change {
            callback(&ColorChange::from(self.color));
        }
    }
}

fn step_multiplier(modifiers: KeyModifiers) -> f64 {
    if modifiers.contains(KeyModifiers::SHIFT) {
        SHIFT_MULTIPLIER
    } else {
        1.0
    }
}

/// Index of the token the cursor is in or directly after.
///
/// The cursor belongs to the last token starting at or before it; a cursor
/// before the first token selects the first.
fn token_at_cursor(tokens: &[NumericToken<'_>], cursor: usize) -> usize {
    tokens
        .iter()
        .rposition(|token| cursor >= token.start)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_core::{Rect, Size};
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    fn layout() -> ControlLayout {
        ControlLayout {
            preview: Rect::new(0, 0, 180, 20),
            hue: Rect::new(0, 30, 180, 10),
            sat_light: Rect::new(0, 50, 200, 100),
            alpha: Rect::new(0, 160, 100, 10),
            handle: Size::new(10, 10),
        }
    }

    fn picker() -> ColorPicker {
        ColorPicker::new(PickerOptions::default()).with_layout(layout())
    }

    fn press(x: i32, y: i32) -> Event {
        Event::from(PointerEvent::down(PointerButton::Left, x, y))
    }

    fn key(code: KeyCode) -> Event {
        Event::from(KeyEvent::plain(code))
    }

    mod visibility_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_press_on_bound_shows_and_snapshots() {
            let mut picker = picker();
            picker.bind("hsla(10, 20%, 30%, 1)").unwrap();
            let result = picker.handle_event(EventTarget::Bound, &press(0, 0)).unwrap();
            assert!(result.is_handled());
            assert!(picker.is_active());
            assert_eq!(picker.snapshot(), Some(Color::hsl(10.0, 20.0, 30.0)));
        }

        #[test]
        fn test_secondary_press_on_bound_is_ignored() {
            let mut picker = picker();
            let right = Event::from(PointerEvent::down(PointerButton::Right, 0, 0));
            let result = picker.handle_event(EventTarget::Bound, &right).unwrap();
            assert!(result.is_ignored());
            assert!(!picker.is_active());
        }

        #[test]
        fn test_press_on_bound_while_active_stays_active() {
            let mut picker = picker();
            picker.show();
            picker.handle_event(EventTarget::Bound, &press(0, 0)).unwrap();
            assert!(picker.is_active());
        }

        #[test]
        fn test_press_outside_hides_and_writes_bound() {
            let mut picker = picker();
            picker.bind("").unwrap();
            picker.show();
            picker.handle_event(EventTarget::Picker, &press(90, 35)).unwrap();
            // not written while open
            assert_eq!(picker.bound_value(), Some(""));

            let result = picker.handle_event(EventTarget::Outside, &press(500, 500)).unwrap();
            assert!(result.is_handled());
            assert!(!picker.is_active());
            assert_eq!(picker.bound_value(), Some("hsla(180, 100%, 50%, 1)"));
        }

        #[test]
        fn test_press_outside_while_hidden_is_ignored() {
            let mut picker = picker();
            let result = picker.handle_event(EventTarget::Outside, &press(500, 500)).unwrap();
            assert!(result.is_ignored());
        }

        #[test]
        fn test_press_inside_picker_keeps_it_open() {
            let mut picker = picker();
            picker.show();
            picker.handle_event(EventTarget::Picker, &press(5, 25)).unwrap();
            picker.handle_event(EventTarget::ValuesField { cursor: 0 }, &press(0, 200)).unwrap();
            assert!(picker.is_active());
        }

        #[test]
        fn test_escape_reverts_without_writing_bound() {
            let mut picker = picker();
            picker.bind("hsla(10, 20%, 30%, 1)").unwrap();
            picker.handle_event(EventTarget::Bound, &key(KeyCode::Enter)).unwrap();
            picker.handle_event(EventTarget::Picker, &press(90, 35)).unwrap();
            assert_eq!(picker.color().hue(), 180);

            picker.handle_event(EventTarget::Picker, &key(KeyCode::Esc)).unwrap();
            assert!(!picker.is_active());
            assert_eq!(picker.color(), Color::hsl(10.0, 20.0, 30.0));
            assert_eq!(picker.bound_value(), Some("hsla(10, 20%, 30%, 1)"));
            assert_eq!(picker.values_text(), "hsla(10, 20%, 30%, 1)");
        }

        #[test]
        fn test_enter_while_active_takes_new_snapshot() {
            let mut picker = picker();
            picker.show();
            picker.set_color(Color::hsl(50.0, 50.0, 50.0));
            picker.handle_event(EventTarget::Picker, &key(KeyCode::Enter)).unwrap();
            assert_eq!(picker.snapshot(), Some(Color::hsl(50.0, 50.0, 50.0)));
        }

        #[test]
        fn test_keys_outside_are_ignored() {
            let mut picker = picker();
            let result = picker.handle_event(EventTarget::Outside, &key(KeyCode::Enter)).unwrap();
            assert!(result.is_ignored());
            assert!(!picker.is_active());
        }

        #[test]
        fn test_revert() {
            let mut picker = picker();
            assert!(matches!(picker.revert(), Err(PickerError::NoSnapshot)));
            picker.show();
            picker.set_color(Color::BLACK);
            picker.revert().unwrap();
            assert_eq!(picker.color(), Color::default());
            assert!(picker.is_active());
        }
    }

    mod drag_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_press_applies_value_and_starts_drag() {
            let mut picker = picker();
            picker.handle_event(EventTarget::Picker, &press(90, 35)).unwrap();
            assert_eq!(picker.color().hue(), 180);
            assert_eq!(picker.drag_state(), DragState::Dragging(ControlKind::Hue));
        }

        #[test]
        fn test_drag_tracks_outside_the_control() {
            let mut picker = picker();
            picker.handle_event(EventTarget::Picker, &press(90, 35)).unwrap();
            let drag = Event::from(PointerEvent::drag(PointerButton::Left, 45, 300));
            picker.handle_event(EventTarget::Outside, &drag).unwrap();
            assert_eq!(picker.color().hue(), 90);
            let drag = Event::from(PointerEvent::drag(PointerButton::Left, -30, 300));
            picker.handle_event(EventTarget::Outside, &drag).unwrap();
            assert_eq!(picker.color().hue(), 0);
        }

        #[test]
        fn test_release_ends_drag() {
            let mut picker = picker();
            picker.handle_event(EventTarget::Picker, &press(50, 125)).unwrap();
            assert_eq!(
                (picker.color().saturation(), picker.color().lightness()),
                (25, 25)
            );
            let up = Event::from(PointerEvent::up(PointerButton::Left, 0, 0));
            assert!(picker.handle_event(EventTarget::Outside, &up).unwrap().is_handled());
            assert_eq!(picker.drag_state(), DragState::Idle);

            let moved = Event::from(PointerEvent::moved(200, 50));
            assert!(picker.handle_event(EventTarget::Picker, &moved).unwrap().is_ignored());
            assert_eq!(picker.color().saturation(), 25);
        }

        #[test]
        fn test_secondary_press_does_not_drag() {
            let mut picker = picker();
            let right = Event::from(PointerEvent::down(PointerButton::Right, 90, 35));
            picker.handle_event(EventTarget::Picker, &right).unwrap();
            assert_eq!(picker.drag_state(), DragState::Idle);
            assert_eq!(picker.color().hue(), 0);
        }

        #[test]
        fn test_touch_drags_like_primary_button() {
            let mut picker = picker();
            picker
                .handle_event(EventTarget::Picker, &Event::from(PointerEvent::touch_start(10, 165)))
                .unwrap();
            picker
                .handle_event(EventTarget::Picker, &Event::from(PointerEvent::touch_move(60, 165)))
                .unwrap();
            assert_eq!(picker.color().alpha(), 0.6);
            picker
                .handle_event(EventTarget::Picker, &Event::from(PointerEvent::touch_end(60, 165)))
                .unwrap();
            assert_eq!(picker.drag_state(), DragState::Idle);
        }

        #[test]
        fn test_preview_click_cycles_display() {
            let mut picker = picker();
            picker.handle_event(EventTarget::Picker, &press(5, 5)).unwrap();
            assert_eq!(picker.display(), DisplayFormat::Rgb);
            assert_eq!(picker.values_text(), "rgba(255, 0, 0, 1)");
            picker.handle_event(EventTarget::Picker, &press(5, 5)).unwrap();
            assert_eq!(picker.values_text(), "#FF0000");
            picker.handle_event(EventTarget::Picker, &press(5, 5)).unwrap();
            assert_eq!(picker.values_text(), "hsla(0, 100%, 50%, 1)");
            assert_eq!(picker.drag_state(), DragState::Idle);
        }
    }

    mod scroll_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        fn wheel(direction: ScrollDirection, x: i32, y: i32, modifiers: KeyModifiers) -> Event {
            Event::from(ScrollEvent::new(direction, x, y).with_modifiers(modifiers))
        }

        #[test]
        fn test_hue_wheel() {
            let mut picker = picker().with_color(Color::hsl(100.0, 50.0, 50.0));
            let up = wheel(ScrollDirection::Up, 5, 35, KeyModifiers::NONE);
            picker.handle_event(EventTarget::Picker, &up).unwrap();
            assert_eq!(picker.color().hue(), 101);
            let down = wheel(ScrollDirection::Down, 5, 35, KeyModifiers::SHIFT);
            picker.handle_event(EventTarget::Picker, &down).unwrap();
            assert_eq!(picker.color().hue(), 91);
        }

        #[test]
        fn test_hue_wheel_clamps() {
            let mut picker = picker().with_color(Color::hsl(355.0, 50.0, 50.0));
            picker.scroll_control(ControlKind::Hue, ScrollDirection::Up, KeyModifiers::SHIFT);
            assert_eq!(picker.color().hue(), 360);
        }

        #[test]
        fn test_alpha_wheel() {
            let mut picker = picker().with_color(Color::new(0.0, 100.0, 50.0, 0.5));
            picker.scroll_control(ControlKind::Alpha, ScrollDirection::Up, KeyModifiers::NONE);
            assert_eq!(picker.color().alpha(), 0.51);
            picker.scroll_control(ControlKind::Alpha, ScrollDirection::Down, KeyModifiers::SHIFT);
            assert_eq!(picker.color().alpha(), 0.41);
            picker.scroll_control(ControlKind::Alpha, ScrollDirection::Up, KeyModifiers::SHIFT);
            picker.scroll_control(ControlKind::Alpha, ScrollDirection::Up, KeyModifiers::SHIFT);
            picker.scroll_control(ControlKind::Alpha, ScrollDirection::Up, KeyModifiers::SHIFT);
            assert_eq!(picker.color().alpha(), 0.71);
        }

        #[test]
        fn test_sat_light_wheel_alt_selects_saturation() {
            let mut picker = picker().with_color(Color::hsl(0.0, 50.0, 50.0));
            picker.scroll_control(ControlKind::SatLight, ScrollDirection::Up, KeyModifiers::NONE);
            assert_eq!((picker.color().saturation(), picker.color().lightness()), (50, 51));
            picker.scroll_control(ControlKind::SatLight, ScrollDirection::Down, KeyModifiers::ALT);
            assert_eq!((picker.color().saturation(), picker.color().lightness()), (49, 51));
        }

        #[test]
        fn test_wheel_on_preview_or_gap_is_ignored() {
            let mut picker = picker();
            let on_preview = wheel(ScrollDirection::Up, 5, 5, KeyModifiers::NONE);
            assert!(picker.handle_event(EventTarget::Picker, &on_preview).unwrap().is_ignored());
            let in_gap = wheel(ScrollDirection::Up, 5, 25, KeyModifiers::NONE);
            assert!(picker.handle_event(EventTarget::Picker, &in_gap).unwrap().is_ignored());
        }
    }

    mod nudge_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        fn nudge(picker: &mut ColorPicker, cursor: usize, code: KeyCode, modifiers: KeyModifiers) {
            picker
                .handle_event(
                    EventTarget::ValuesField { cursor },
                    &Event::from(KeyEvent::new(code, modifiers)),
                )
                .unwrap();
        }

        #[test]
        fn test_nudge_each_token() {
            let mut picker = picker().with_color(Color::new(200.0, 40.0, 30.0, 0.5));
            assert_eq!(picker.values_text(), "hsla(200, 40%, 30%, 0.5)");

            nudge(&mut picker, 6, KeyCode::Up, KeyModifiers::NONE);
            assert_eq!(picker.values_text(), "hsla(201, 40%, 30%, 0.5)");

            nudge(&mut picker, 10, KeyCode::Down, KeyModifiers::SHIFT);
            assert_eq!(picker.values_text(), "hsla(201, 30%, 30%, 0.5)");

            nudge(&mut picker, 15, KeyCode::Up, KeyModifiers::NONE);
            assert_eq!(picker.values_text(), "hsla(201, 30%, 31%, 0.5)");

            nudge(&mut picker, 21, KeyCode::Up, KeyModifiers::NONE);
            assert_eq!(picker.values_text(), "hsla(201, 30%, 31%, 0.51)");
        }

        #[test]
        fn test_cursor_between_tokens_selects_preceding() {
            let mut picker = picker().with_color(Color::new(200.0, 40.0, 30.0, 0.5));
            // cursor on the ", " after the hue
            nudge(&mut picker, 8, KeyCode::Up, KeyModifiers::NONE);
            assert_eq!(picker.color().hue(), 201);
            // cursor before the first token
            nudge(&mut picker, 0, KeyCode::Up, KeyModifiers::NONE);
            assert_eq!(picker.color().hue(), 202);
        }

        #[test]
        fn test_nudge_clamps() {
            let mut picker = picker().with_color(Color::new(0.0, 100.0, 50.0, 0.95));
            nudge(&mut picker, 9, KeyCode::Up, KeyModifiers::SHIFT);
            assert_eq!(picker.color().saturation(), 100);
            nudge(&mut picker, 5, KeyCode::Down, KeyModifiers::NONE);
            assert_eq!(picker.color().hue(), 0);
            nudge(&mut picker, 20, KeyCode::Up, KeyModifiers::SHIFT);
            assert_eq!(picker.color().alpha(), 1.0);
        }

        #[test]
        fn test_nudge_only_in_hsl_mode() {
            let mut picker = picker();
            picker.cycle_display();
            let before = picker.color();
            let result = picker
                .handle_event(EventTarget::ValuesField { cursor: 6 }, &key(KeyCode::Up))
                .unwrap();
            assert!(result.is_ignored());
            assert_eq!(picker.color(), before);
        }

        #[test]
        fn test_missing_alpha_keeps_current_alpha() {
            let mut picker = picker().with_color(Color::new(10.0, 20.0, 30.0, 0.4));
            picker.input_values_text("hsl(10, 20%, 30%)").unwrap();
            // parsing without alpha makes it opaque
            assert_eq!(picker.color().alpha(), 1.0);

            picker.values_text = "hsl(10, 20%, 30%)".to_string();
            picker.color = Color::new(10.0, 20.0, 30.0, 0.4);
            assert!(picker
                .nudge_values(5, ScrollDirection::Up, KeyModifiers::NONE)
                .unwrap());
            assert_eq!(picker.color(), Color::new(11.0, 20.0, 30.0, 0.4));
        }

        #[test]
        fn test_wheel_on_values_field_nudges() {
            let mut picker = picker();
            let wheel = Event::from(ScrollEvent::new(ScrollDirection::Down, 0, 0));
            picker
                .handle_event(EventTarget::ValuesField { cursor: 12 }, &wheel)
                .unwrap();
            assert_eq!(picker.color().saturation(), 99);
        }
    }

    mod text_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_values_text_updates_color_and_format() {
            let mut picker = picker();
            let typed = Event::Text("#00FF00".to_string());
            picker
                .handle_event(EventTarget::ValuesField { cursor: 7 }, &typed)
                .unwrap();
            assert_eq!(picker.color(), Color::hsl(120.0, 100.0, 50.0));
            assert_eq!(picker.display(), DisplayFormat::Hex);
            assert_eq!(picker.values_text(), "#00FF00");
        }

        #[test]
        fn test_invalid_text_keeps_color() {
            let mut picker = picker();
            let typed = Event::Text("rgb(1, 2".to_string());
            let err = picker
                .handle_event(EventTarget::ValuesField { cursor: 0 }, &typed)
                .unwrap_err();
            assert!(matches!(err, PickerError::Parse(_)));
            assert_eq!(picker.color(), Color::default());
            assert_eq!(picker.display(), DisplayFormat::Hsl);
            assert_eq!(picker.values_text(), "rgb(1, 2");

            // still interactive
            picker.handle_event(EventTarget::Picker, &press(90, 35)).unwrap();
            assert_eq!(picker.values_text(), "hsla(180, 100%, 50%, 1)");
        }

        #[test]
        fn test_bound_text_parses() {
            let mut picker = picker();
            picker.bind("").unwrap();
            picker
                .handle_event(EventTarget::Bound, &Event::Text("rgba(10, 20, 30, 0.5)".to_string()))
                .unwrap();
            assert_eq!(picker.values_text(), "rgba(10, 20, 31, 0.5)");
            assert_eq!(picker.bound_value(), Some("rgba(10, 20, 30, 0.5)"));
        }

        #[test]
        fn test_bind_invalid_initial_value() {
            let mut picker = picker();
            assert!(picker.bind("not a color").is_err());
            assert_eq!(picker.bound_value(), Some("not a color"));
            assert_eq!(picker.color(), Color::default());
        }
    }

    mod sync_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        fn live_picker() -> ColorPicker {
            let options = PickerOptions {
                set_value_on_close: false,
                ..PickerOptions::default()
            };
            ColorPicker::new(options).with_layout(layout())
        }

        #[test]
        fn test_live_sync_writes_every_change() {
            let mut picker = live_picker();
            picker.bind("").unwrap();
            picker.handle_event(EventTarget::Picker, &press(90, 35)).unwrap();
            assert_eq!(picker.bound_value(), Some("hsla(180, 100%, 50%, 1)"));
        }

        #[test]
        fn test_live_sync_on_cancel_writes_restored_value() {
            let mut picker = live_picker();
            picker.bind("").unwrap();
            picker.show();
            picker.handle_event(EventTarget::Picker, &press(90, 35)).unwrap();
            picker.cancel();
            assert_eq!(picker.bound_value(), Some("hsla(0, 100%, 50%, 1)"));
        }

        #[test]
        fn test_no_bound_writes_when_disabled() {
            let options = PickerOptions {
                change_bound_value: false,
                ..PickerOptions::default()
            };
            let mut picker = ColorPicker::new(options).with_layout(layout());
            picker.bind("").unwrap();
            picker.show();
            picker.handle_event(EventTarget::Picker, &press(90, 35)).unwrap();
            picker.hide();
            assert_eq!(picker.bound_value(), Some(""));
        }

        #[test]
        fn test_bound_uses_display_format() {
            let mut picker = picker();
            picker.bind("").unwrap();
            picker.show();
            picker.cycle_display();
            picker.cycle_display();
            picker.hide();
            assert_eq!(picker.bound_value(), Some("#FF0000"));
        }
    }

    mod change_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_every_mutation_notifies() {
            let seen = Arc::new(Mutex::new(Vec::new()));
            let sink = Arc::clone(&seen);
            let mut picker = picker().on_change(move |change| {
                sink.lock().unwrap().push(change.hex.to_string());
            });

            picker.handle_event(EventTarget::Picker, &press(60, 35)).unwrap();
            let drag = Event::from(PointerEvent::drag(PointerButton::Left, 120, 35));
            picker.handle_event(EventTarget::Picker, &drag).unwrap();
            picker.cycle_display();

            assert_eq!(*seen.lock().unwrap(), vec!["#00FF00", "#0000FF"]);
        }

        #[test]
        fn test_set_on_change_replaces_callback() {
            let first = Arc::new(Mutex::new(0));
            let second = Arc::new(Mutex::new(0));
            let sink = Arc::clone(&first);
            let mut picker = picker().on_change(move |_| *sink.lock().unwrap() += 1);
            picker.set_color(Color::BLACK);

            let sink = Arc::clone(&second);
            picker.set_on_change(move |_| *sink.lock().unwrap() += 1);
            picker.set_color(Color::WHITE);

            assert_eq!(*first.lock().unwrap(), 1);
            assert_eq!(*second.lock().unwrap(), 1);
        }

        #[test]
        fn test_change_carries_all_representations() {
            let picker = picker().with_color(Color::new(240.0, 100.0, 50.0, 0.25));
            let change = picker.change();
            assert_eq!(change.hsla, Color::new(240.0, 100.0, 50.0, 0.25));
            assert_eq!(change.rgba, chroma_core::Rgb::with_alpha(0, 0, 255, 0.25));
            assert_eq!(change.hex.as_str(), "#0000FF");
        }
    }

    mod render_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_gradients_follow_options() {
            let picker = picker().with_color(Color::new(200.0, 20.0, 30.0, 0.4));
            assert_eq!(picker.hue_gradient()[1].color, Color::new(60.0, 20.0, 30.0, 0.4));
            assert_eq!(picker.alpha_gradient()[0].color.alpha(), 0.0);
            assert_eq!(picker.sat_light_opacity(), 0.4);

            let options = PickerOptions {
                change_hue: false,
                change_with_alpha: false,
                ..PickerOptions::default()
            };
            let picker = ColorPicker::new(options).with_color(Color::new(200.0, 20.0, 30.0, 0.4));
            assert_eq!(picker.hue_gradient()[1].color, Color::hsl(60.0, 100.0, 50.0));
            assert_eq!(picker.sat_light_opacity(), 1.0);
        }

        #[test]
        fn test_sat_light_color_at_uses_page_point() {
            let picker = picker().with_color(Color::hsl(120.0, 10.0, 10.0));
            assert_eq!(
                picker.sat_light_color_at(Point::new(100, 100)),
                Color::hsl(120.0, 50.0, 50.0)
            );
        }

        #[test]
        fn test_set_layout_moves_hit_testing() {
            let mut picker = picker();
            picker.set_layout(ControlLayout::stacked(Point::new(0, 200), 180));
            assert_eq!(picker.layout().hue.y, 224);

            picker.handle_event(EventTarget::Picker, &press(90, 35)).unwrap();
            assert_eq!(picker.drag_state(), DragState::Idle);
            picker.handle_event(EventTarget::Picker, &press(90, 224)).unwrap();
            assert_eq!(picker.color().hue(), 180);
        }

        #[test]
        fn test_handle_offsets_follow_color() {
            let mut picker = picker();
            picker.handle_event(EventTarget::Picker, &press(90, 35)).unwrap();
            assert_eq!(picker.handle_offset(ControlKind::Hue).unwrap().x, 85.0);
            assert_eq!(picker.handle_offset(ControlKind::Preview), None);
        }
    }

    #[test]
    fn test_token_at_cursor() {
        let tokens = numeric_tokens("hsla(10, 20%, 30%, 0.5)");
        assert_eq!(token_at_cursor(&tokens, 0), 0);
        assert_eq!(token_at_cursor(&tokens, 5), 0);
        assert_eq!(token_at_cursor(&tokens, 8), 0);
        assert_eq!(token_at_cursor(&tokens, 9), 1);
        assert_eq!(token_at_cursor(&tokens, 19), 3);
        assert_eq!(token_at_cursor(&tokens, 100), 3);
    }
}
