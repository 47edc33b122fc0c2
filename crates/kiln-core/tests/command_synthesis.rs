//! End-to-end command synthesis on simulated hosts.

use kiln_core::{
    BuildSetup, Dependency, Error, FlagKind, HostOs, PlatformTarget, SetupOptions, Target,
};

fn setup_for(os: HostOs, target: Target, sources: &[&str]) -> BuildSetup {
    BuildSetup::new(
        sources.iter().copied(),
        SetupOptions {
            platform: Some(PlatformTarget::new(os, target)),
            output_dir: Some("/game/bin".into()),
            deps_dir: Some("/game/deps".into()),
            ..SetupOptions::default()
        },
    )
    .unwrap()
}

/// Position of the first token of each present slot must be increasing.
fn assert_slot_order(command: &str) {
    let markers = [" \"", " -O", " -D ", " -s ", " -I\"", " -L\"", " -l", " -o \""];
    let mut last = 0;
    for marker in markers {
        if let Some(pos) = command.find(marker) {
            assert!(pos >= last, "{marker:?} out of order in {command}");
            last = pos;
        }
    }
    assert!(command.ends_with(".out\"") || command.ends_with(".exe\"") || command.ends_with(".html\""));
}

#[test]
fn linux_graphics_end_to_end() {
    let mut setup = setup_for(HostOs::Linux, Target::Native, &["main.cpp"]);
    setup.include_graphics_library().unwrap();

    assert_eq!(
        setup.generate_command(),
        r#"g++ "main.cpp" -I"/usr/include" -lSDL2 -lSDL2_image -lGL -lSDL2_image -o "/game/bin/run.out""#
    );
}

#[test]
fn windows_graphics_and_networking_end_to_end() {
    let mut setup = setup_for(HostOs::Windows, Target::Native, &["src/main.cpp", "src/net.cpp"]);
    setup
        .include_networking_library()
        .unwrap()
        .include_graphics_library()
        .unwrap()
        .enable_debug();

    let expected = [
        r#""/game/deps/mingw64/bin/g++""#,
        r#""src/main.cpp" "src/net.cpp""#,
        "-D USE_DEBUG",
        r#"-I"/game/deps/asio/include""#,
        r#"-I"/game/deps/sdl_mingw/SDL2-2.30.7/x86_64-w64-mingw32/include/SDL2""#,
        r#"-I"/game/deps/sdl_mingw/SDL2-2.30.7/x86_64-w64-mingw32/include""#,
        r#"-I"/game/deps/sdl_mingw/SDL2_image-2.8.2/x86_64-w64-mingw32/include""#,
        r#"-I"/game/deps/glew-2.2.0/include""#,
        r#"-L"/game/deps/sdl_mingw/SDL2-2.30.7/x86_64-w64-mingw32/lib""#,
        r#"-L"/game/deps/sdl_mingw/SDL2_image-2.8.2/x86_64-w64-mingw32/lib""#,
        r#"-L"/game/deps/glew-2.2.0/lib/Release/x64""#,
        "-lws2_32 -lmingw32 -lglew32 -lopengl32 -lSDL2main -lSDL2 -lSDL2_image",
        r#"-o "/game/bin/run.exe""#,
    ]
    .join(" ");

    assert_eq!(setup.generate_command(), expected);
}

#[test]
fn browser_graphics_end_to_end() {
    let mut setup = setup_for(HostOs::Linux, Target::Browser, &["main.cpp"]);
    setup.include_graphics_library().unwrap();

    assert_eq!(
        setup.generate_command(),
        concat!(
            r#""/game/deps/emsdk/upstream/emscripten/em++" "main.cpp" "#,
            "-s USE_SDL=2 -s USE_SDL_IMAGE=2 -s EXTRA_EXPORTED_RUNTIME_METHODS=ccall,cwrap -s FULL_ES3=1 ",
            r#"-o "/game/bin/run.html""#
        )
    );
}

#[test]
fn slot_order_is_independent_of_call_order() {
    let mut forward = setup_for(HostOs::Windows, Target::Native, &["main.cpp"]);
    forward
        .enable_debug()
        .optimization_level("2")
        .unwrap()
        .include_graphics_library()
        .unwrap();

    let mut backward = setup_for(HostOs::Windows, Target::Native, &["main.cpp"]);
    backward.include_graphics_library().unwrap();
    backward.optimization_level("2").unwrap();
    backward.enable_debug();

    assert_eq!(forward.generate_command(), backward.generate_command());
    assert_slot_order(&forward.generate_command());
}

#[test]
fn every_combination_keeps_slot_order() {
    for os in [HostOs::Windows, HostOs::Linux] {
        for target in [Target::Native, Target::Browser] {
            let mut setup = setup_for(os, target, &["a.cpp", "b.cpp"]);
            setup.enable_debug();
            setup.include(Dependency::Graphics).unwrap();
            let _ = setup.include(Dependency::Networking);

            let command = setup.generate_command();
            assert_slot_order(&command);
            assert!(!command.contains("  "), "double space in {command}");
        }
    }
}

#[test]
fn no_inclusions_is_compiler_sources_output() {
    let setup = setup_for(HostOs::Linux, Target::Native, &["main.cpp", "util.cpp"]);
    assert_eq!(
        setup.generate_command(),
        r#"g++ "main.cpp" "util.cpp" -o "/game/bin/run.out""#
    );
}

#[test]
fn networking_in_browser_is_rejected_without_mutation() {
    let mut setup = setup_for(HostOs::Windows, Target::Browser, &["main.cpp"]);
    let before = setup.generate_command();

    let err = setup.include_networking_library().unwrap_err();
    assert!(matches!(
        err,
        Error::UnsupportedDependency {
            dependency: Dependency::Networking,
            target: Target::Browser
        }
    ));
    assert_eq!(setup.generate_command(), before);
    assert!(setup.slot(FlagKind::IncludePath).is_empty());
}

#[test]
fn native_graphics_on_other_host_is_rejected() {
    let platform = PlatformTarget::new(HostOs::Other, Target::Native);
    assert!(matches!(
        Dependency::Graphics.pack(platform, "/deps"),
        Err(Error::UnsupportedPlatform { .. })
    ));
}
