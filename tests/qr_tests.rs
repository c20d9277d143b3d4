#[cfg(test)]
mod qr_proptests {

    use prop::string::string_regex;
    use proptest::prelude::*;

    use qrstudio::*;
    use reader::scan_image;

    pub fn ec_level_strategy() -> BoxedStrategy<ECLevel> {
        prop_oneof![Just(ECLevel::L), Just(ECLevel::M), Just(ECLevel::Q), Just(ECLevel::H)].boxed()
    }

    pub fn qr_strategy(regex: String) -> impl Strategy<Value = (ECLevel, String)> {
        ec_level_strategy().prop_flat_map(move |ecl| {
            let pattern = format!(r"{}{{1,{}}}", regex, 120);
            string_regex(&pattern).unwrap().prop_map(move |data| (ecl, data))
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn proptest_numeric(params in qr_strategy("[0-9]".to_string())) {
            let (ecl, data) = params;

            let img = QRBuilder::new(&data).ec_level(ecl).module_size(4).build().unwrap();
            let res = scan_image(&image::DynamicImage::ImageRgb8(img));

            prop_assert_eq!(res, ScanResult::Found(data));
        }

        #[test]
        fn proptest_alphanumeric(params in qr_strategy(r"[0-9A-Z $%*+\-./:]".to_string())) {
            let (ecl, data) = params;

            let img = QRBuilder::new(&data).ec_level(ecl).module_size(4).build().unwrap();
            let res = scan_image(&image::DynamicImage::ImageRgb8(img));

            prop_assert_eq!(res, ScanResult::Found(data));
        }

        #[test]
        fn proptest_text(params in qr_strategy("[ -~éüñß]".to_string())) {
            let (ecl, data) = params;

            let img = QRBuilder::new(&data).ec_level(ecl).module_size(4).build().unwrap();
            let res = scan_image(&image::DynamicImage::ImageRgb8(img));

            prop_assert_eq!(res, ScanResult::Found(data));
        }
    }
}

#[cfg(test)]
mod qr_tests {
    use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};
    use test_case::test_case;

    use qrstudio::{
        builder::{encode_png, LogoRegion},
        reader::{scan, scan_image},
        Color, ECLevel, Palette, QRBuilder, QRError, ScanResult,
    };

    fn png_of(img: DynamicImage) -> Vec<u8> {
        let mut buf = std::io::Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test_case("Hello, world!🌎".to_string(), ECLevel::L; "test_qr_1")]
    #[test_case("TEST".to_string(), ECLevel::M; "test_qr_2")]
    #[test_case("12345".to_string(), ECLevel::Q; "test_qr_3")]
    #[test_case("OK".to_string(), ECLevel::H; "test_qr_4")]
    #[test_case("https://example.com/path?query=1&other=two#frag".to_string(), ECLevel::M; "test_qr_5")]
    #[test_case("A11111111111111".repeat(11).to_string(), ECLevel::M; "test_qr_6")]
    #[test_case("aAAAAAA1111111111111AAAAAAa".repeat(3).to_string(), ECLevel::Q; "test_qr_7")]
    #[test_case("1234567890".repeat(15).to_string(), ECLevel::H; "test_qr_8")]
    #[test_case("héllo wörld, ça va?".to_string(), ECLevel::L; "test_qr_9")]
    #[test_case("WIFI:T:WPA;S:home;P:correct horse battery staple;;".to_string(), ECLevel::M; "test_qr_10")]
    fn test_qr(data: String, ecl: ECLevel) {
        let img = QRBuilder::new(&data).ec_level(ecl).module_size(3).build().unwrap();

        let res = scan(&encode_png(&img).unwrap()).expect("Failed to read QR");

        assert_eq!(res, ScanResult::Found(data));
    }

    #[test]
    fn test_scan_jpeg() {
        let data = "jpeg round trip";
        let img = QRBuilder::new(data).build().unwrap();

        let mut buf = std::io::Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(img).write_to(&mut buf, image::ImageFormat::Jpeg).unwrap();

        let res = scan(&buf.into_inner()).unwrap();
        assert_eq!(res, ScanResult::Found(data.to_string()));
    }

    #[test_case(90; "rotated 90")]
    #[test_case(180; "rotated 180")]
    #[test_case(270; "rotated 270")]
    fn test_scan_rotated(angle: u32) {
        let data = "rotation does not matter";
        let img = QRBuilder::new(data).module_size(4).build().unwrap();
        let img = match angle {
            90 => image::imageops::rotate90(&img),
            180 => image::imageops::rotate180(&img),
            _ => image::imageops::rotate270(&img),
        };

        let res = scan_image(&DynamicImage::ImageRgb8(img));
        assert_eq!(res, ScanResult::Found(data.to_string()));
    }

    #[test_case(Palette::default(); "black on white")]
    #[test_case(Palette::new(Color(0x1e, 0x3a, 0x8a), Color(0xfd, 0xe6, 0x8a)); "navy on sand")]
    #[test_case(Palette::new(Color(0x00, 0x80, 0x40), Color(0xf0, 0xf0, 0xf0)); "green on gray")]
    fn test_color_fidelity(palette: Palette) {
        let mut bldr = QRBuilder::new("https://example.com");
        bldr.palette(palette);
        let qr = bldr.symbol().unwrap();
        let img = bldr.build().unwrap();

        let style = qrstudio::Style::default().with_palette(palette);
        for r in 0..qr.width() {
            for c in 0..qr.width() {
                let (x, y) = qr.module_center(r, c, &style);
                let exp = if qr.is_dark(r, c) { palette.fg } else { palette.bg };
                assert_eq!(Color::from(*img.get_pixel(x, y)), exp, "Module at {r} {c}");
            }
        }
    }

    #[test_case(10, 10; "small square")]
    #[test_case(500, 500; "large square")]
    #[test_case(40, 10; "wide")]
    #[test_case(7, 300; "tall")]
    fn test_logo_region(logo_w: u32, logo_h: u32) {
        let logo = png_of(DynamicImage::ImageRgb8(RgbImage::from_pixel(
            logo_w,
            logo_h,
            Rgb([255, 0, 0]),
        )));

        let img = QRBuilder::new("https://example.com").logo(&logo).build().unwrap();
        let (w, h) = img.dimensions();
        let region = LogoRegion::centered(w, h);
        assert_eq!((region.w, region.h), (w / 4, h / 4));
        assert_eq!((region.x, region.y), ((w - w / 4) / 2, (h - h / 4) / 2));

        for (x, y, px) in img.enumerate_pixels() {
            let is_red = px.0 == [255, 0, 0];
            assert_eq!(is_red, region.contains(x, y), "Pixel at {x} {y}");
        }
    }

    #[test]
    fn test_transparent_logo() {
        let logo = png_of(DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            64,
            64,
            Rgba([255, 0, 0, 0]),
        )));

        let plain = QRBuilder::new("https://example.com").build().unwrap();
        let with_logo = QRBuilder::new("https://example.com").logo(&logo).build().unwrap();
        assert_eq!(plain, with_logo);
    }

    #[test]
    fn test_no_qr_is_not_found() {
        let blank = png_of(DynamicImage::ImageRgb8(RgbImage::from_pixel(
            300,
            300,
            Rgb([240, 240, 240]),
        )));
        assert_eq!(scan(&blank).unwrap(), ScanResult::NotFound);

        let stripes = RgbImage::from_fn(300, 300, |x, _| {
            if (x / 10) % 2 == 0 {
                Rgb([0, 0, 0])
            } else {
                Rgb([255, 255, 255])
            }
        });
        assert_eq!(scan_image(&DynamicImage::ImageRgb8(stripes)), ScanResult::NotFound);
    }

    #[test]
    fn test_corrupt_image_is_decode_error() {
        let png = encode_png(&QRBuilder::new("truncated").build().unwrap()).unwrap();
        let res = scan(&png[..png.len() / 2]);
        assert!(matches!(res, Err(QRError::ImageDecode(_))));
    }

    #[test]
    fn test_empty_payload() {
        assert!(matches!(QRBuilder::new("").build(), Err(QRError::EmptyData)));
    }
}
