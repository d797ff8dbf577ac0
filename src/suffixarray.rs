/// ランクの倍々法でSuffix Arrayを求める
///
/// 範囲外のランクは-1として比較することで, 短い接尾辞がその延長より先に来る.
fn sa_doubling(mut rnk: Vec<i64>) -> Vec<usize> {
    let n = rnk.len();
    let mut sa = (0..n).collect::<Vec<_>>();
    let mut tmp = vec![0; n];
    let mut k = 1;
    while k < n {
        let key = |x: usize| (rnk[x], if x + k < n { rnk[x + k] } else { -1 });
        sa.sort_unstable_by_key(|&x| key(x));
        tmp[sa[0]] = 0;
        for i in 1..n {
            tmp[sa[i]] = tmp[sa[i - 1]] + i64::from(key(sa[i - 1]) < key(sa[i]));
        }
        std::mem::swap(&mut tmp, &mut rnk);
        k <<= 1;
    }
    sa
}

/// 列`s`のSuffix Arrayを求める.
///
/// 返り値は`0..n`の順列で, `s[sa[i]..]`を辞書順に並べたもの.
/// 要素は全順序さえあればよい.
///
/// # Time complexity
///
/// - *O*(*n* (log *n*)²)
#[must_use]
pub fn suffix_array<T: Ord>(s: &[T]) -> Vec<usize> {
    let n = s.len();
    let mut idx = (0..n).collect::<Vec<_>>();
    idx.sort_by_key(|&i| &s[i]);
    let mut rnk = vec![0; n];
    for i in 1..n {
        rnk[idx[i]] = rnk[idx[i - 1]] + i64::from(s[idx[i - 1]] != s[idx[i]]);
    }
    sa_doubling(rnk)
}

/// 列`s`とそのSuffix Arrayから, Kasaiのアルゴリズムで LCP Array を求める.
///
/// 返り値の`i`番目は`s[sa[i]..]`と`s[sa[i + 1]..]`の最長共通接頭辞の長さで,
/// 長さは`n - 1` (`n == 0`のときは`0`) になる.
///
/// # Constraints
///
/// - `sa`は`s`のSuffix Arrayである
///
/// # Time complexity
///
/// - *O*(*n*)
#[must_use]
pub fn lcp_array<T: Eq>(s: &[T], sa: &[usize]) -> Vec<usize> {
    let n = s.len();
    debug_assert_eq!(sa.len(), n);
    if n == 0 {
        return vec![];
    }
    let mut rnk = vec![0; n];
    for (i, &s) in sa.iter().enumerate() {
        rnk[s] = i;
    }
    let mut lcp = vec![0; n - 1];
    let mut h: usize = 0;
    for (i, &r) in rnk.iter().enumerate() {
        h = h.saturating_sub(1);
        if r == 0 {
            continue;
        }
        let j = sa[r - 1];
        while j + h < n && i + h < n && s[j + h] == s[i + h] {
            h += 1;
        }
        lcp[r - 1] = h;
    }
    lcp
}
