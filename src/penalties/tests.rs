use ndarray::{array, Array1};

use crate::penalties::*;
use crate::traits::ProxOperator;

macro_rules! prox_tests {
    ($($penalty_name:ident: $payload:expr,)*) => {
        $(
            mod $penalty_name {
                use super::*;

                #[test]
                fn test_value() {
                    let w = array![3.4, 0., -2.3, -0.3, 0.];
                    let payload = $payload;
                    let val = payload.penalty.value(w.view(), payload.param);
                    approx::assert_abs_diff_eq!(val, payload.value, epsilon = 1e-12);
                }

                #[test]
                fn test_prox() {
                    let v = array![0.3, 12.4, -49.2, -0.9, 1.1];
                    let payload = $payload;
                    let prox = payload.penalty.prox(v.view(), payload.param);
                    assert_eq!(prox, payload.prox);
                }
            }
        )*
    }
}

struct Payload<P: ProxOperator<f64>> {
    penalty: P,
    param: f64,
    value: f64,
    prox: Array1<f64>,
}

prox_tests! {
    identity_05: Payload {
        penalty: Identity,
        param: 0.5,
        value: 0.,
        prox: array![0.3, 12.4, -49.2, -0.9, 1.1],
    },

    l1_1: Payload {
        penalty: L1,
        param: 1.,
        value: 6.,
        prox: array![0., 11.4, -48.2, 0., 0.10000000000000009],
    },

    l1_2: Payload {
        penalty: L1,
        param: 2.,
        value: 12.,
        prox: array![0., 10.4, -47.2, 0., 0.],
    },

    l0_05: Payload {
        penalty: L0,
        param: 0.5,
        value: 1.5,
        prox: array![0., 12.4, -49.2, 0., 1.1],
    },

    l0_0075: Payload {
        penalty: L0,
        param: 0.075,
        value: 0.22499999999999998,
        prox: array![0., 12.4, -49.2, -0.9, 1.1],
    },
}

#[test]
fn test_closure_prox() {
    fn clip() -> impl Fn(ndarray::ArrayView1<f64>, f64) -> Array1<f64> {
        |v, param| v.mapv(|vj| vj.max(-param).min(param))
    }
    let v = array![0.3, 12.4, -49.2];
    let prox = clip();
    assert_eq!(ProxOperator::prox(&prox, v.view(), 1.), array![0.3, 1., -1.]);
    assert_eq!(ProxOperator::value(&prox, v.view(), 1.), 0.);
}
