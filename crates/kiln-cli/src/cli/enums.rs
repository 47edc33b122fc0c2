use clap::ValueEnum;

/// What the compiled program runs on
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum TargetArg {
    /// Native executable built with g++ (MinGW on Windows)
    #[value(name = "native")]
    Native,

    /// WebAssembly + HTML built with emscripten, served on localhost
    #[value(name = "browser")]
    Browser,
}

/// Host OS to preview flags for
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum HostOsArg {
    #[value(name = "windows")]
    Windows,
    #[value(name = "linux")]
    Linux,
    #[value(name = "other")]
    Other,
}

/// Library to link
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum DependencyArg {
    /// SDL2, SDL2_image and OpenGL
    #[value(name = "graphics", alias = "opengl", alias = "sdl")]
    Graphics,

    /// Header-only asio (native only)
    #[value(name = "networking", alias = "asio")]
    Networking,
}
