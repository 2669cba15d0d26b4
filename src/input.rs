use glutin::event::{ElementState, KeyboardInput, VirtualKeyCode};

/// Close flag shared between event handling and the frame loop.
#[derive(Debug, Default)]
pub struct Input {
    should_close: bool,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn process_keyboard(&mut self, input: &KeyboardInput) {
        self.key(input.virtual_keycode, input.state);
    }

    pub fn key(&mut self, keycode: Option<VirtualKeyCode>, state: ElementState) {
        if let (Some(VirtualKeyCode::Escape), ElementState::Pressed) = (keycode, state) {
            log::debug!("escape pressed, closing window");
            self.should_close = true;
        }
    }

    pub fn close_requested(&mut self) {
        self.should_close = true;
    }

    pub fn should_close(&self) -> bool {
        self.should_close
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_press_sets_close_flag() {
        let mut input = Input::new();
        assert!(!input.should_close());
        input.key(Some(VirtualKeyCode::Escape), ElementState::Pressed);
        assert!(input.should_close());
    }

    #[test]
    fn escape_release_and_other_keys_are_ignored() {
        let mut input = Input::new();
        input.key(Some(VirtualKeyCode::Escape), ElementState::Released);
        input.key(Some(VirtualKeyCode::Space), ElementState::Pressed);
        input.key(None, ElementState::Pressed);
        assert!(!input.should_close());
    }

    #[test]
    fn close_flag_is_sticky() {
        let mut input = Input::new();
        input.close_requested();
        input.key(Some(VirtualKeyCode::Escape), ElementState::Released);
        assert!(input.should_close());
    }
}
