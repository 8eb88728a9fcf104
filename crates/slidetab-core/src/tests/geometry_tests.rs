use super::*;

#[test]
fn default_geometry_derives_reference_bounds() {
    let geometry = TabGeometry::default();
    assert_eq!(geometry.closed_offset(), Dp(-65.0));
    assert_eq!(geometry.open_offset(), Dp(13.0));
    assert_eq!(geometry.vertical_min(), Dp(16.0));
    assert_eq!(geometry.vertical_max(), Dp(249.0));
    assert_eq!(geometry.validate(), Ok(()));
}

#[test]
fn sizes_expose_panel_and_handle() {
    let geometry = TabGeometry::default();
    assert_eq!(geometry.panel_size(), Size::new(65.0, 300.0));
    assert_eq!(geometry.vertical_handle_size(), Size::new(40.0, 35.0));
}

#[test]
fn negative_size_is_rejected() {
    let geometry = TabGeometry::default().with_handle_width(Dp(-1.0));
    assert_eq!(
        geometry.validate(),
        Err(GeometryError::Negative {
            field: "handle_width",
            value: Dp(-1.0),
        })
    );
}

#[test]
fn non_finite_size_is_rejected() {
    let geometry = TabGeometry::default().with_track_width(Dp(f32::NAN));
    assert_eq!(
        geometry.validate(),
        Err(GeometryError::NonFinite {
            field: "track_width"
        })
    );
}

#[test]
fn handle_taller_than_track_is_rejected() {
    let geometry = TabGeometry::default().with_vertical_handle(Dp(40.0), Dp(290.0));
    let err = geometry.validate().expect_err("handle cannot fit");
    assert_eq!(
        err,
        GeometryError::InvertedVerticalRange {
            min: Dp(16.0),
            max: Dp(-6.0),
        }
    );
    assert!(err.to_string().contains("does not fit"));
}

#[test]
fn tight_fit_is_allowed() {
    let geometry = TabGeometry::default()
        .with_track_height(Dp(67.0))
        .with_vertical_inset(Dp(16.0));
    assert_eq!(geometry.vertical_min(), geometry.vertical_max());
    assert!(geometry.validate().is_ok());
}
