use super::error::{Error, Result};
use super::math::{is_prime, primitive_root};
use super::modint::ModInt;

struct NttParam<const N: u32>;
impl<const N: u32> NttParam<N> {
    /// `N - 1`が2で割り切れる回数. 変換長は`2^RANK2`まで
    const RANK2: u32 = {
        assert!(is_prime(N));
        (N - 1).trailing_zeros()
    };
    const G: u32 = primitive_root(N);
}

/// 数論変換を行う
///
/// # Constraints
///
/// - `N`は素数
/// - `a.len()`は2のべき乗で, `N - 1`を割り切る
///
/// # Time complexity
///
/// - *O*(*n* log *n*)
pub fn ntt<const N: u32>(a: &mut [ModInt<N>]) {
    debug_assert!(a.len().is_power_of_two());
    debug_assert!(a.len() <= 1 << NttParam::<N>::RANK2);
    let h = a.len().trailing_zeros();
    if h == 0 {
        return;
    }
    for i in 0..a.len() {
        let j = i.reverse_bits() >> (usize::BITS - h);
        if i < j {
            a.swap(i, j);
        }
    }

    let g = ModInt::<N>::new(NttParam::<N>::G);
    for i in 0..h {
        let r = g.pow(((N - 1) >> (i + 1)) as u64);
        for j in (0..a.len()).step_by(1 << (i + 1)) {
            let mut s = ModInt::<N>::new(1);
            for l in j..j + (1 << i) {
                let x = a[l];
                let y = a[l + (1 << i)] * s;
                a[l] = x + y;
                a[l + (1 << i)] = x - y;
                s *= r;
            }
        }
    }
}

/// 数論変換の逆変換を行う
///
/// # Constraints
///
/// - `N`は素数
/// - `a.len()`は2のべき乗で, `N - 1`を割り切る
///
/// # Time complexity
///
/// - *O*(*n* log *n*)
pub fn inv_ntt<const N: u32>(a: &mut [ModInt<N>]) {
    debug_assert!(a.len().is_power_of_two());
    debug_assert!(a.len() <= 1 << NttParam::<N>::RANK2);
    let h = a.len().trailing_zeros();
    if h == 0 {
        return;
    }
    for i in 0..a.len() {
        let j = i.reverse_bits() >> (usize::BITS - h);
        if i < j {
            a.swap(i, j);
        }
    }

    let g = ModInt::<N>::new(NttParam::<N>::G);
    for i in 0..h {
        let r = g.pow(((N - 1) >> (i + 1)) as u64).inv();
        for j in (0..a.len()).step_by(1 << (i + 1)) {
            let mut s = ModInt::<N>::new(1);
            for l in j..j + (1 << i) {
                let x = a[l];
                let y = a[l + (1 << i)] * s;
                a[l] = x + y;
                a[l + (1 << i)] = x - y;
                s *= r;
            }
        }
    }

    let coef = ModInt::<N>::new(a.len() as u32).inv();
    for a in a.iter_mut() {
        *a *= coef;
    }
}

/// 多項式`a`, `b`の積の係数列を計算する
///
/// # Constraints
///
/// - `N`は素数
/// - `a.len() + b.len() - 1`以上の最小の2のべき乗が`N - 1`を割り切る
///
/// # Time complexity
///
/// - *O*((*n* + *m*) log (*n* + *m*))
#[must_use]
pub fn convolution<const N: u32>(a: &[ModInt<N>], b: &[ModInt<N>]) -> Vec<ModInt<N>> {
    if a.is_empty() || b.is_empty() {
        return vec![];
    }
    let len = a.len() + b.len() - 1;
    let len_ceil = len.next_power_of_two();
    debug_assert!(len_ceil <= 1 << NttParam::<N>::RANK2);
    let mut na = vec![ModInt::<N>::new(0); len_ceil];
    na[..a.len()].copy_from_slice(a);
    let mut nb = vec![ModInt::<N>::new(0); len_ceil];
    nb[..b.len()].copy_from_slice(b);
    ntt(&mut na);
    ntt(&mut nb);
    for (a, b) in na.iter_mut().zip(&nb) {
        *a *= b;
    }
    inv_ntt(&mut na);
    na.truncate(len);
    na
}

/// `convolution`の検査付き版. 必要な長さの変換が法`N`で行えないときは
/// `Error::UnsupportedModulus`を返す.
pub fn try_convolution<const N: u32>(a: &[ModInt<N>], b: &[ModInt<N>]) -> Result<Vec<ModInt<N>>> {
    if a.is_empty() || b.is_empty() {
        return Ok(vec![]);
    }
    let len = a.len() + b.len() - 1;
    if len.next_power_of_two() > 1 << NttParam::<N>::RANK2 {
        return Err(Error::UnsupportedModulus { modulus: N });
    }
    Ok(convolution(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn naive<const N: u32>(a: &[ModInt<N>], b: &[ModInt<N>]) -> Vec<ModInt<N>> {
        if a.is_empty() || b.is_empty() {
            return vec![];
        }
        let mut c = vec![ModInt::<N>::new(0); a.len() + b.len() - 1];
        for (i, &a) in a.iter().enumerate() {
            for (j, &b) in b.iter().enumerate() {
                c[i + j] += a * b;
            }
        }
        c
    }

    #[test]
    fn ntt_roundtrip() {
        type Mint = ModInt<998244353>;
        let a = [2, 7, 1, 8, 2, 8, 1, 8].map(Mint::new);
        let mut b = a;
        ntt(&mut b);
        inv_ntt(&mut b);
        assert_eq!(a, b);

        let mut c = [Mint::new(12345)];
        ntt(&mut c);
        inv_ntt(&mut c);
        assert_eq!(c[0].val(), 12345);
    }

    #[test]
    fn conv() {
        type Mint = ModInt<998244353>;
        let a = [1, 4, 1, 4, 2, 1, 3, 5].map(Mint::new);
        let b = [6, 2, 6, 4, 3, 9, 8].map(Mint::new);
        assert_eq!(convolution(&a, &b), naive(&a, &b));
    }

    #[test]
    fn conv_random() {
        type Mint = ModInt<377487361>;
        let mut rng = StdRng::seed_from_u64(628);
        for _ in 0..20 {
            let n = rng.gen_range(1..40);
            let m = rng.gen_range(1..40);
            let a = (0..n).map(|_| Mint::new(rng.gen())).collect::<Vec<_>>();
            let b = (0..m).map(|_| Mint::new(rng.gen())).collect::<Vec<_>>();
            assert_eq!(convolution(&a, &b), naive(&a, &b));
        }
    }

    #[test]
    fn empty() {
        type Mint = ModInt<998244353>;
        assert_eq!(convolution::<998244353>(&[], &[Mint::new(1)]), vec![]);
        assert_eq!(try_convolution::<998244353>(&[Mint::new(1)], &[]), Ok(vec![]));
    }

    #[test]
    fn unsupported_modulus() {
        // 23 - 1 = 2 * 11 なので変換長は2まで
        type Mint = ModInt<23>;
        let a = [1, 2].map(Mint::new);
        let b = [3, 4].map(Mint::new);
        assert_eq!(
            try_convolution(&a, &b),
            Err(Error::UnsupportedModulus { modulus: 23 })
        );
        assert_eq!(
            try_convolution(&a[..1], &b[..1]),
            Ok(vec![Mint::new(3)])
        );
    }
}
