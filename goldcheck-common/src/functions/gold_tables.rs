//! Built-in gold tables. Each table mirrors `gold/<name>.dat`.

use crate::entities::GoldRecord;

pub const ABS_F32: &[GoldRecord] = &[
    GoldRecord::new(-4.5, 0.0, 0.0, 4.5),
    GoldRecord::new(-2.25, 0.0, 0.0, 2.25),
    GoldRecord::new(-1.0, 0.0, 0.0, 1.0),
    GoldRecord::new(-0.5, 0.0, 0.0, 0.5),
    GoldRecord::new(-0.001, 0.0, 0.0, 0.001),
    GoldRecord::new(0.0, 0.0, 0.0, 0.0),
    GoldRecord::new(0.001, 0.0, 0.0, 0.001),
    GoldRecord::new(0.5, 0.0, 0.0, 0.5),
    GoldRecord::new(1.0, 0.0, 0.0, 1.0),
    GoldRecord::new(2.25, 0.0, 0.0, 2.25),
    GoldRecord::new(4.5, 0.0, 0.0, 4.5),
    GoldRecord::new(100.0, 0.0, 0.0, 100.0),
    GoldRecord::new(-1234.5, 0.0, 0.0, 1234.5),
    GoldRecord::new(3.1415927, 0.0, 0.0, 3.1415927),
];

pub const SQRT_F32: &[GoldRecord] = &[
    GoldRecord::new(0.0, 0.0, 0.0, 0.0),
    GoldRecord::new(0.0001, 0.0, 0.0, 0.01),
    GoldRecord::new(0.25, 0.0, 0.0, 0.5),
    GoldRecord::new(0.5, 0.0, 0.0, 0.70710677),
    GoldRecord::new(1.0, 0.0, 0.0, 1.0),
    GoldRecord::new(2.0, 0.0, 0.0, 1.4142135),
    GoldRecord::new(3.0, 0.0, 0.0, 1.7320508),
    GoldRecord::new(4.0, 0.0, 0.0, 2.0),
    GoldRecord::new(9.0, 0.0, 0.0, 3.0),
    GoldRecord::new(10.0, 0.0, 0.0, 3.1622777),
    GoldRecord::new(100.0, 0.0, 0.0, 10.0),
    GoldRecord::new(12345.678, 0.0, 0.0, 111.11111),
    GoldRecord::new(1000000.0, 0.0, 0.0, 1000.0),
];

pub const INVSQRT_F32: &[GoldRecord] = &[
    GoldRecord::new(0.01, 0.0, 0.0, 10.0),
    GoldRecord::new(0.25, 0.0, 0.0, 2.0),
    GoldRecord::new(0.5, 0.0, 0.0, 1.4142135),
    GoldRecord::new(1.0, 0.0, 0.0, 1.0),
    GoldRecord::new(2.0, 0.0, 0.0, 0.70710677),
    GoldRecord::new(3.0, 0.0, 0.0, 0.57735026),
    GoldRecord::new(4.0, 0.0, 0.0, 0.5),
    GoldRecord::new(9.0, 0.0, 0.0, 0.33333334),
    GoldRecord::new(10.0, 0.0, 0.0, 0.31622776),
    GoldRecord::new(100.0, 0.0, 0.0, 0.1),
    GoldRecord::new(12345.678, 0.0, 0.0, 0.009000001),
    GoldRecord::new(1000000.0, 0.0, 0.0, 0.001),
];

pub const INV_F32: &[GoldRecord] = &[
    GoldRecord::new(-8.0, 0.0, 0.0, -0.125),
    GoldRecord::new(-2.0, 0.0, 0.0, -0.5),
    GoldRecord::new(-0.5, 0.0, 0.0, -2.0),
    GoldRecord::new(-0.1, 0.0, 0.0, -10.0),
    GoldRecord::new(0.1, 0.0, 0.0, 10.0),
    GoldRecord::new(0.5, 0.0, 0.0, 2.0),
    GoldRecord::new(1.0, 0.0, 0.0, 1.0),
    GoldRecord::new(2.0, 0.0, 0.0, 0.5),
    GoldRecord::new(3.0, 0.0, 0.0, 0.33333334),
    GoldRecord::new(7.0, 0.0, 0.0, 0.14285715),
    GoldRecord::new(100.0, 0.0, 0.0, 0.01),
    GoldRecord::new(1000.0, 0.0, 0.0, 0.001),
];

pub const EXP_F32: &[GoldRecord] = &[
    GoldRecord::new(-10.0, 0.0, 0.0, 4.539993e-05),
    GoldRecord::new(-5.0, 0.0, 0.0, 0.006737947),
    GoldRecord::new(-2.0, 0.0, 0.0, 0.13533528),
    GoldRecord::new(-1.0, 0.0, 0.0, 0.36787945),
    GoldRecord::new(-0.5, 0.0, 0.0, 0.60653067),
    GoldRecord::new(0.0, 0.0, 0.0, 1.0),
    GoldRecord::new(0.5, 0.0, 0.0, 1.6487212),
    GoldRecord::new(1.0, 0.0, 0.0, 2.7182817),
    GoldRecord::new(2.0, 0.0, 0.0, 7.389056),
    GoldRecord::new(5.0, 0.0, 0.0, 148.41316),
    GoldRecord::new(10.0, 0.0, 0.0, 22026.465),
    GoldRecord::new(20.0, 0.0, 0.0, 485165200.0),
];

pub const LN_F32: &[GoldRecord] = &[
    GoldRecord::new(0.001, 0.0, 0.0, -6.9077554),
    GoldRecord::new(0.1, 0.0, 0.0, -2.3025851),
    GoldRecord::new(0.5, 0.0, 0.0, -0.6931472),
    GoldRecord::new(1.0, 0.0, 0.0, 0.0),
    GoldRecord::new(2.0, 0.0, 0.0, 0.6931472),
    GoldRecord::new(2.7182817, 0.0, 0.0, 0.99999994),
    GoldRecord::new(10.0, 0.0, 0.0, 2.3025851),
    GoldRecord::new(100.0, 0.0, 0.0, 4.6051702),
    GoldRecord::new(1000.0, 0.0, 0.0, 6.9077554),
    GoldRecord::new(1000000.0, 0.0, 0.0, 13.815511),
];

pub const SIN_F32: &[GoldRecord] = &[
    GoldRecord::new(-3.1415927, 0.0, 0.0, 8.742278e-08),
    GoldRecord::new(-2.0, 0.0, 0.0, -0.9092974),
    GoldRecord::new(-1.0, 0.0, 0.0, -0.84147096),
    GoldRecord::new(-0.5, 0.0, 0.0, -0.47942555),
    GoldRecord::new(0.0, 0.0, 0.0, 0.0),
    GoldRecord::new(0.5, 0.0, 0.0, 0.47942555),
    GoldRecord::new(1.0, 0.0, 0.0, 0.84147096),
    GoldRecord::new(1.5707964, 0.0, 0.0, 1.0),
    GoldRecord::new(2.0, 0.0, 0.0, 0.9092974),
    GoldRecord::new(3.0, 0.0, 0.0, 0.14112),
    GoldRecord::new(3.1415927, 0.0, 0.0, -8.742278e-08),
    GoldRecord::new(6.0, 0.0, 0.0, -0.2794155),
];

pub const COS_F32: &[GoldRecord] = &[
    GoldRecord::new(-3.1415927, 0.0, 0.0, -1.0),
    GoldRecord::new(-2.0, 0.0, 0.0, -0.41614684),
    GoldRecord::new(-1.0, 0.0, 0.0, 0.5403023),
    GoldRecord::new(-0.5, 0.0, 0.0, 0.87758255),
    GoldRecord::new(0.0, 0.0, 0.0, 1.0),
    GoldRecord::new(0.5, 0.0, 0.0, 0.87758255),
    GoldRecord::new(1.0, 0.0, 0.0, 0.5403023),
    GoldRecord::new(1.5707964, 0.0, 0.0, -4.371139e-08),
    GoldRecord::new(2.0, 0.0, 0.0, -0.41614684),
    GoldRecord::new(3.0, 0.0, 0.0, -0.9899925),
    GoldRecord::new(3.1415927, 0.0, 0.0, -1.0),
    GoldRecord::new(6.0, 0.0, 0.0, 0.96017027),
];

pub const TANH_F32: &[GoldRecord] = &[
    GoldRecord::new(-5.0, 0.0, 0.0, -0.9999092),
    GoldRecord::new(-2.0, 0.0, 0.0, -0.9640276),
    GoldRecord::new(-1.0, 0.0, 0.0, -0.7615942),
    GoldRecord::new(-0.5, 0.0, 0.0, -0.46211717),
    GoldRecord::new(-0.1, 0.0, 0.0, -0.099667996),
    GoldRecord::new(0.0, 0.0, 0.0, 0.0),
    GoldRecord::new(0.1, 0.0, 0.0, 0.099667996),
    GoldRecord::new(0.5, 0.0, 0.0, 0.46211717),
    GoldRecord::new(1.0, 0.0, 0.0, 0.7615942),
    GoldRecord::new(2.0, 0.0, 0.0, 0.9640276),
    GoldRecord::new(5.0, 0.0, 0.0, 0.9999092),
    GoldRecord::new(10.0, 0.0, 0.0, 1.0),
];

pub const ADD_F32: &[GoldRecord] = &[
    GoldRecord::new(-7.5, 2.0, 0.0, -5.5),
    GoldRecord::new(-3.0, -4.0, 0.0, -7.0),
    GoldRecord::new(-1.25, 0.5, 0.0, -0.75),
    GoldRecord::new(-0.5, -0.25, 0.0, -0.75),
    GoldRecord::new(0.0, 3.0, 0.0, 3.0),
    GoldRecord::new(0.25, 8.0, 0.0, 8.25),
    GoldRecord::new(1.0, -1.0, 0.0, 0.0),
    GoldRecord::new(1.5, 1.5, 0.0, 3.0),
    GoldRecord::new(2.0, -2.5, 0.0, -0.5),
    GoldRecord::new(3.75, 0.75, 0.0, 4.5),
    GoldRecord::new(10.0, 0.1, 0.0, 10.1),
    GoldRecord::new(123.456, -6.5, 0.0, 116.956),
];

pub const SUB_F32: &[GoldRecord] = &[
    GoldRecord::new(-7.5, 2.0, 0.0, -9.5),
    GoldRecord::new(-3.0, -4.0, 0.0, 1.0),
    GoldRecord::new(-1.25, 0.5, 0.0, -1.75),
    GoldRecord::new(-0.5, -0.25, 0.0, -0.25),
    GoldRecord::new(0.0, 3.0, 0.0, -3.0),
    GoldRecord::new(0.25, 8.0, 0.0, -7.75),
    GoldRecord::new(1.0, -1.0, 0.0, 2.0),
    GoldRecord::new(1.5, 1.5, 0.0, 0.0),
    GoldRecord::new(2.0, -2.5, 0.0, 4.5),
    GoldRecord::new(3.75, 0.75, 0.0, 3.0),
    GoldRecord::new(10.0, 0.1, 0.0, 9.9),
    GoldRecord::new(123.456, -6.5, 0.0, 129.956),
];

pub const MUL_F32: &[GoldRecord] = &[
    GoldRecord::new(-7.5, 2.0, 0.0, -15.0),
    GoldRecord::new(-3.0, -4.0, 0.0, 12.0),
    GoldRecord::new(-1.25, 0.5, 0.0, -0.625),
    GoldRecord::new(-0.5, -0.25, 0.0, 0.125),
    GoldRecord::new(0.0, 3.0, 0.0, 0.0),
    GoldRecord::new(0.25, 8.0, 0.0, 2.0),
    GoldRecord::new(1.0, -1.0, 0.0, -1.0),
    GoldRecord::new(1.5, 1.5, 0.0, 2.25),
    GoldRecord::new(2.0, -2.5, 0.0, -5.0),
    GoldRecord::new(3.75, 0.75, 0.0, 2.8125),
    GoldRecord::new(10.0, 0.1, 0.0, 1.0),
    GoldRecord::new(123.456, -6.5, 0.0, -802.464),
];

pub const DIV_F32: &[GoldRecord] = &[
    GoldRecord::new(-7.5, 2.0, 0.0, -3.75),
    GoldRecord::new(-3.0, -4.0, 0.0, 0.75),
    GoldRecord::new(-1.25, 0.5, 0.0, -2.5),
    GoldRecord::new(-0.5, -0.25, 0.0, 2.0),
    GoldRecord::new(0.0, 3.0, 0.0, 0.0),
    GoldRecord::new(0.25, 8.0, 0.0, 0.03125),
    GoldRecord::new(1.0, -1.0, 0.0, -1.0),
    GoldRecord::new(1.5, 1.5, 0.0, 1.0),
    GoldRecord::new(2.0, -2.5, 0.0, -0.8),
    GoldRecord::new(3.75, 0.75, 0.0, 5.0),
    GoldRecord::new(10.0, 0.1, 0.0, 100.0),
    GoldRecord::new(123.456, -6.5, 0.0, -18.99323),
];

pub const ATAN2_F32: &[GoldRecord] = &[
    GoldRecord::new(-7.5, 2.0, 0.0, -1.3101939),
    GoldRecord::new(-3.0, -4.0, 0.0, -2.4980915),
    GoldRecord::new(-1.25, 0.5, 0.0, -1.19029),
    GoldRecord::new(-0.5, -0.25, 0.0, -2.0344439),
    GoldRecord::new(0.0, 3.0, 0.0, 0.0),
    GoldRecord::new(0.25, 8.0, 0.0, 0.031239834),
    GoldRecord::new(1.0, -1.0, 0.0, 2.3561945),
    GoldRecord::new(1.5, 1.5, 0.0, 0.7853982),
    GoldRecord::new(2.0, -2.5, 0.0, 2.4668517),
    GoldRecord::new(3.75, 0.75, 0.0, 1.3734008),
    GoldRecord::new(10.0, 0.1, 0.0, 1.5607966),
    GoldRecord::new(123.456, -6.5, 0.0, 1.6233981),
];

pub const SUM_F32: &[GoldRecord] = &[
    GoldRecord::new(3.5, 0.0, 0.0, 19.125),
    GoldRecord::new(-1.25, 0.0, 0.0, 19.125),
    GoldRecord::new(0.75, 0.0, 0.0, 19.125),
    GoldRecord::new(8.0, 0.0, 0.0, 19.125),
    GoldRecord::new(-6.5, 0.0, 0.0, 19.125),
    GoldRecord::new(2.0, 0.0, 0.0, 19.125),
    GoldRecord::new(0.125, 0.0, 0.0, 19.125),
    GoldRecord::new(4.25, 0.0, 0.0, 19.125),
    GoldRecord::new(-0.5, 0.0, 0.0, 19.125),
    GoldRecord::new(1.0, 0.0, 0.0, 19.125),
    GoldRecord::new(9.75, 0.0, 0.0, 19.125),
    GoldRecord::new(-2.0, 0.0, 0.0, 19.125),
];

pub const MEAN_F32: &[GoldRecord] = &[
    GoldRecord::new(3.5, 0.0, 0.0, 1.59375),
    GoldRecord::new(-1.25, 0.0, 0.0, 1.59375),
    GoldRecord::new(0.75, 0.0, 0.0, 1.59375),
    GoldRecord::new(8.0, 0.0, 0.0, 1.59375),
    GoldRecord::new(-6.5, 0.0, 0.0, 1.59375),
    GoldRecord::new(2.0, 0.0, 0.0, 1.59375),
    GoldRecord::new(0.125, 0.0, 0.0, 1.59375),
    GoldRecord::new(4.25, 0.0, 0.0, 1.59375),
    GoldRecord::new(-0.5, 0.0, 0.0, 1.59375),
    GoldRecord::new(1.0, 0.0, 0.0, 1.59375),
    GoldRecord::new(9.75, 0.0, 0.0, 1.59375),
    GoldRecord::new(-2.0, 0.0, 0.0, 1.59375),
];

pub const MAX_F32: &[GoldRecord] = &[
    GoldRecord::new(3.5, 0.0, 0.0, 9.75),
    GoldRecord::new(-1.25, 0.0, 0.0, 9.75),
    GoldRecord::new(0.75, 0.0, 0.0, 9.75),
    GoldRecord::new(8.0, 0.0, 0.0, 9.75),
    GoldRecord::new(-6.5, 0.0, 0.0, 9.75),
    GoldRecord::new(2.0, 0.0, 0.0, 9.75),
    GoldRecord::new(0.125, 0.0, 0.0, 9.75),
    GoldRecord::new(4.25, 0.0, 0.0, 9.75),
    GoldRecord::new(-0.5, 0.0, 0.0, 9.75),
    GoldRecord::new(1.0, 0.0, 0.0, 9.75),
    GoldRecord::new(9.75, 0.0, 0.0, 9.75),
    GoldRecord::new(-2.0, 0.0, 0.0, 9.75),
];

pub const MIN_F32: &[GoldRecord] = &[
    GoldRecord::new(3.5, 0.0, 0.0, -6.5),
    GoldRecord::new(-1.25, 0.0, 0.0, -6.5),
    GoldRecord::new(0.75, 0.0, 0.0, -6.5),
    GoldRecord::new(8.0, 0.0, 0.0, -6.5),
    GoldRecord::new(-6.5, 0.0, 0.0, -6.5),
    GoldRecord::new(2.0, 0.0, 0.0, -6.5),
    GoldRecord::new(0.125, 0.0, 0.0, -6.5),
    GoldRecord::new(4.25, 0.0, 0.0, -6.5),
    GoldRecord::new(-0.5, 0.0, 0.0, -6.5),
    GoldRecord::new(1.0, 0.0, 0.0, -6.5),
    GoldRecord::new(9.75, 0.0, 0.0, -6.5),
    GoldRecord::new(-2.0, 0.0, 0.0, -6.5),
];

pub const DOT_F32: &[GoldRecord] = &[
    GoldRecord::new(3.5, 2.0, 0.0, 29.1),
    GoldRecord::new(-1.25, -4.0, 0.0, 29.1),
    GoldRecord::new(0.75, 0.5, 0.0, 29.1),
    GoldRecord::new(8.0, -0.25, 0.0, 29.1),
    GoldRecord::new(-6.5, 3.0, 0.0, 29.1),
    GoldRecord::new(2.0, 8.0, 0.0, 29.1),
    GoldRecord::new(0.125, -1.0, 0.0, 29.1),
    GoldRecord::new(4.25, 1.5, 0.0, 29.1),
    GoldRecord::new(-0.5, -2.5, 0.0, 29.1),
    GoldRecord::new(1.0, 0.75, 0.0, 29.1),
    GoldRecord::new(9.75, 0.1, 0.0, 29.1),
    GoldRecord::new(-2.0, -6.5, 0.0, 29.1),
];
