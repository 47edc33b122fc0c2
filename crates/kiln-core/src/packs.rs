//! Dependency flag packs.
//!
//! A pack is a pure function of `(dependency, platform, deps_dir)` that
//! produces the compiler settings, include paths, library paths and library
//! files a third-party library needs. Packs only ever contribute to slots
//! 5–8; the compiler, sources, macros and output are owned by the setup.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::flags::{Flag, FlagKind};
use crate::path::join;
use crate::platform::{HostOs, PlatformTarget, Target};

/// Bundled SDL2 tree for MinGW, relative to the dependencies directory.
const SDL2_MINGW: &str = "sdl_mingw/SDL2-2.30.7/x86_64-w64-mingw32";
/// Bundled SDL2_image tree for MinGW.
const SDL2_IMAGE_MINGW: &str = "sdl_mingw/SDL2_image-2.8.2/x86_64-w64-mingw32";
/// Bundled GLEW tree.
const GLEW: &str = "glew-2.2.0";
/// Header-only asio tree.
const ASIO: &str = "asio";

/// Third-party library that can be requested by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dependency {
    /// SDL2 + SDL2_image windowing/input with an OpenGL context (GLEW on Windows)
    Graphics,
    /// Header-only asio sockets
    Networking,
}

impl Dependency {
    pub fn name(self) -> &'static str {
        match self {
            Dependency::Graphics => "graphics",
            Dependency::Networking => "networking",
        }
    }

    /// Produce this dependency's flags for `platform`.
    pub fn pack(self, platform: PlatformTarget, deps_dir: &str) -> Result<FlagPack> {
        match self {
            Dependency::Graphics => graphics_pack(platform, deps_dir),
            Dependency::Networking => networking_pack(platform, deps_dir),
        }
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Flags contributed by one dependency.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagPack {
    /// Slot 5 values (`KEY=VALUE`)
    pub settings: Vec<String>,
    /// Slot 6 directories
    pub include_paths: Vec<String>,
    /// Slot 7 directories
    pub library_paths: Vec<String>,
    /// Slot 8 library names
    pub library_files: Vec<String>,
}

impl FlagPack {
    /// Convert into typed flags, preserving order within each slot.
    pub fn into_flags(self) -> Vec<Flag> {
        let Self {
            settings,
            include_paths,
            library_paths,
            library_files,
        } = self;

        settings
            .into_iter()
            .map(|v| Flag::new(FlagKind::Setting, v))
            .chain(include_paths.into_iter().map(|v| Flag::new(FlagKind::IncludePath, v)))
            .chain(library_paths.into_iter().map(|v| Flag::new(FlagKind::LibraryPath, v)))
            .chain(library_files.into_iter().map(|v| Flag::new(FlagKind::LibraryFile, v)))
            .collect()
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// SDL2 + SDL2_image + OpenGL.
///
/// # Errors
///
/// Returns [`Error::UnsupportedPlatform`] for native builds on
/// [`HostOs::Other`].
pub fn graphics_pack(platform: PlatformTarget, deps_dir: &str) -> Result<FlagPack> {
    // emscripten ports supply headers and libraries for the browser
    if platform.is_browser() {
        return Ok(FlagPack {
            settings: strings(&[
                "USE_SDL=2",
                "USE_SDL_IMAGE=2",
                "EXTRA_EXPORTED_RUNTIME_METHODS=ccall,cwrap",
                "FULL_ES3=1",
            ]),
            ..FlagPack::default()
        });
    }

    match platform.os() {
        HostOs::Windows => Ok(FlagPack {
            settings: Vec::new(),
            include_paths: vec![
                join(deps_dir, &format!("{SDL2_MINGW}/include/SDL2")),
                join(deps_dir, &format!("{SDL2_MINGW}/include")),
                join(deps_dir, &format!("{SDL2_IMAGE_MINGW}/include")),
                join(deps_dir, &format!("{GLEW}/include")),
            ],
            library_paths: vec![
                join(deps_dir, &format!("{SDL2_MINGW}/lib")),
                join(deps_dir, &format!("{SDL2_IMAGE_MINGW}/lib")),
                join(deps_dir, &format!("{GLEW}/lib/Release/x64")),
            ],
            library_files: strings(&[
                "mingw32",
                "glew32",
                "opengl32",
                "SDL2main",
                "SDL2",
                "SDL2_image",
            ]),
        }),
        // SDL2_image is linked twice on Linux; the duplicate is kept as-is.
        HostOs::Linux => Ok(FlagPack {
            include_paths: strings(&["/usr/include"]),
            library_files: strings(&["SDL2", "SDL2_image", "GL", "SDL2_image"]),
            ..FlagPack::default()
        }),
        HostOs::Other => Err(Error::UnsupportedPlatform {
            os: platform.os(),
            target: platform.target(),
        }),
    }
}

/// Header-only asio.
///
/// # Errors
///
/// Returns [`Error::UnsupportedDependency`] for the browser target; there is
/// no sockets binding for emscripten.
pub fn networking_pack(platform: PlatformTarget, deps_dir: &str) -> Result<FlagPack> {
    if platform.target() == Target::Browser {
        return Err(Error::UnsupportedDependency {
            dependency: Dependency::Networking,
            target: platform.target(),
        });
    }

    let mut pack = FlagPack {
        include_paths: vec![join(deps_dir, &format!("{ASIO}/include"))],
        ..FlagPack::default()
    };

    match platform.os() {
        HostOs::Windows => pack.library_files.push("ws2_32".to_string()),
        os => tracing::info!(%os, "no networking library mapping for this platform, using headers only"),
    }

    Ok(pack)
}
