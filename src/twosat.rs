use super::error::{Error, Result};
use super::scc::SccGraph;

/// 2-SATソルバ
///
/// 変数`x_0, ..., x_{n-1}`に対し`(x_i == f) || (x_j == g)`の形の節を追加し,
/// 全てを同時に満たす割当があるか判定する. 節は`2n`頂点の含意グラフの辺2本に
/// 展開され, 判定は`SccGraph`の強連結成分分解で行う.
pub struct TwoSat {
    n: usize,
    scc: SccGraph,
    answer: Option<Box<[bool]>>,
}

impl TwoSat {
    /// `n`変数, 節なしの2-SATを作る.
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            n,
            scc: SccGraph::new(n * 2),
            answer: None,
        }
    }

    /// 変数の個数を返す
    #[must_use]
    pub fn len(&self) -> usize {
        self.n
    }

    /// 変数が0個か判定する
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// リテラル`(x_v == val)`に対応する含意グラフの頂点番号
    fn literal(v: usize, val: bool) -> usize {
        v * 2 + usize::from(!val)
    }

    /// 節`(x_i == f) || (x_j == g)`を追加する.
    ///
    /// # Constraints
    ///
    /// - `i < self.len()`
    /// - `j < self.len()`
    ///
    /// # Time complexity
    ///
    /// - ならし *O*(1)
    pub fn add_clause(&mut self, i: usize, f: bool, j: usize, g: bool) {
        debug_assert!(i < self.n);
        debug_assert!(j < self.n);
        self.scc.add_edge(Self::literal(i, !f), Self::literal(j, g));
        self.scc.add_edge(Self::literal(j, !g), Self::literal(i, f));
        self.answer = None;
    }

    /// `add_clause`の検査付き版. 変数番号が範囲外なら状態を変えずにエラーを返す.
    pub fn try_add_clause(&mut self, i: usize, f: bool, j: usize, g: bool) -> Result<()> {
        for index in [i, j] {
            if index >= self.n {
                return Err(Error::OutOfRange { index, len: self.n });
            }
        }
        self.add_clause(i, f, j, g);
        Ok(())
    }

    /// 全ての節を満たす割当が存在するか判定する.
    ///
    /// 存在した場合は割当を記録し, 以降`answer`で取り出せる.
    ///
    /// # Time complexity
    ///
    /// - 節の個数を *M* として *O*(*N* + *M*)
    pub fn satisfiable(&mut self) -> bool {
        let (_, ids) = self.scc.scc_ids();
        let mut answer = vec![false; self.n].into_boxed_slice();
        for i in 0..self.n {
            if ids[i * 2] == ids[i * 2 + 1] {
                self.answer = None;
                return false;
            }
            // 含意の行き着く先, つまりトポロジカル順で後ろの成分にある側を真にする
            answer[i] = ids[i * 2] > ids[i * 2 + 1];
        }
        self.answer = Some(answer);
        true
    }

    /// 最後に成功した`satisfiable`が見つけた割当を返す.
    ///
    /// `satisfiable`がまだ呼ばれていない, 直近の呼び出しで充足不能だった,
    /// もしくはその後に節が追加されている場合は`Error::PrecedenceViolation`を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    pub fn answer(&self) -> Result<&[bool]> {
        self.answer
            .as_deref()
            .ok_or(Error::PrecedenceViolation("satisfiable() has not succeeded"))
    }
}
