//! Indigo themes, the site's own palette

use ratatui::style::Color;
use crate::theme::Theme;

/// Dark variant (near-black background, indigo accents)
pub fn night() -> Theme {
    Theme {
        bg0: Color::Rgb(0x05, 0x05, 0x05),
        bg1: Color::Rgb(0x11, 0x11, 0x11),
        bg2: Color::Rgb(0x1e, 0x1b, 0x4b), // indigo-950
        fg0: Color::Rgb(0xff, 0xff, 0xff),
        fg1: Color::Rgb(0x9c, 0xa3, 0xaf), // gray-400
        grey0: Color::Rgb(0x37, 0x41, 0x51), // gray-700
        grey1: Color::Rgb(0x6b, 0x72, 0x80), // gray-500
        accent: Color::Rgb(0x63, 0x66, 0xf1), // indigo-500
        selection: Color::Rgb(0x15, 0x15, 0x15),
        tag: Color::Rgb(0xa5, 0xb4, 0xfc), // indigo-300
        price: Color::Rgb(0xff, 0xff, 0xff),
        wishlist: Color::Rgb(0xef, 0x44, 0x44), // red-500
        error: Color::Rgb(0xef, 0x44, 0x44),
        success: Color::Rgb(0x22, 0xc5, 0x5e),
    }
}

/// Light variant
pub fn day() -> Theme {
    Theme {
        bg0: Color::Rgb(0xff, 0xff, 0xff),
        bg1: Color::Rgb(0xee, 0xf2, 0xff), // indigo-50
        bg2: Color::Rgb(0xe0, 0xe7, 0xff), // indigo-100
        fg0: Color::Rgb(0x00, 0x00, 0x00),
        fg1: Color::Rgb(0x6b, 0x72, 0x80),
        grey0: Color::Rgb(0xd1, 0xd5, 0xdb),
        grey1: Color::Rgb(0x9c, 0xa3, 0xaf),
        accent: Color::Rgb(0x4f, 0x46, 0xe5), // indigo-600
        selection: Color::Rgb(0xff, 0xff, 0xff),
        tag: Color::Rgb(0x43, 0x38, 0xca), // indigo-700
        price: Color::Rgb(0x00, 0x00, 0x00),
        wishlist: Color::Rgb(0xef, 0x44, 0x44),
        error: Color::Rgb(0xdc, 0x26, 0x26),
        success: Color::Rgb(0x16, 0xa3, 0x4a),
    }
}
