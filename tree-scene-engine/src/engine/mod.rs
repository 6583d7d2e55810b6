pub mod assets;
pub mod camera;
pub mod interaction;
pub mod scene;
pub mod state;
pub mod ui;
