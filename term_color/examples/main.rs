/*
 *   Copyright (c) 2026 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

use term_color::{ComboAttr,
                 Modifier,
                 NamedColor,
                 StyleError,
                 StyleResult,
                 bg_blue,
                 bold,
                 fg_green,
                 fg_red,
                 global_style_flag,
                 new_color,
                 new_color256,
                 new_color_rgb,
                 new_combo,
                 random_fg_bg,
                 strip_sgr,
                 terminal_self_test};

fn main() -> StyleResult<()> {
    // Show the `tracing::debug!` output when the style flag is toggled.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let flag = global_style_flag::init_from_env();
    println!("> Style flag from environment: {flag:?}");

    // Palette swatch.
    {
        println!("{}", terminal_self_test());
    }

    // Named constructors.
    {
        println!("{} {} {}", fg_green("pass"), fg_red("fail"), bg_blue(" info "));
        bold("Print a bold string w/ ANSI codes.").println();
    }

    // Codes given as strings, eg: from a config file.
    {
        new_color("Standard pair from codes 33 / 44.", Some("33"), Some("44"))?.println();
        new_color256("Extended palette index 208.", Some("208"), None)?.println();
        new_color_rgb("Truecolor foreground.", 255, 105, 180).println();

        let report = |it: Result<_, StyleError>| match it {
            Ok(_) => println!("> Accepted."),
            Err(error) => println!("> Rejected: {error}"),
        };
        report(new_color("out of range", Some("29"), None));
        report(new_color256("not a number", None, Some("blue")));
    }

    // Several attributes in one escape sequence.
    {
        let it = new_combo("DEFCON 1", &[
            ComboAttr::Foreground(NamedColor::White),
            ComboAttr::Background(NamedColor::Red),
            Modifier::Bold.into(),
            Modifier::Blink.into(),
        ]);
        it.println();
        println!("> Rendered: {:?}", it.render());
        println!("> Stripped: {:?}", strip_sgr(&it.render()));
    }

    // A random color pair is picked on each render.
    {
        let dice = random_fg_bg("dice");
        println!("{dice} {dice} {dice}");
    }

    // Toggle styling off and back on.
    {
        let it = fg_green("Printed plain while styling is disabled.");
        global_style_flag::disable();
        it.println();
        global_style_flag::enable();
        it.println();
    }

    Ok(())
}
