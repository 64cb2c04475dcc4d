pub mod core {
    pub mod kinematics;
    pub mod presets;
    pub mod quiz;
    pub mod trajectory;
    pub mod window;
}

pub mod display;
pub mod settings;
pub mod shell;
