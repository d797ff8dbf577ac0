use super::error::{Error, Result};
use super::util::{HasMax, HasZero};

/// 流量として使える型のトレイト
pub trait Capacity:
    Copy + Ord + HasZero + HasMax + std::ops::Add<Output = Self> + std::ops::Sub<Output = Self>
{
}
impl<T> Capacity for T where
    T: Copy + Ord + HasZero + HasMax + std::ops::Add<Output = T> + std::ops::Sub<Output = T>
{
}

/// `add_edge`で追加した辺の状態
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Edge<T> {
    /// 辺の始点
    pub from: usize,
    /// 辺の終点
    pub to: usize,
    /// 辺の容量
    pub cap: T,
    /// 辺に流れている流量
    pub flow: T,
}

#[derive(Clone, Copy)]
struct InnerEdge<T> {
    to: usize,
    rev: usize,
    cap: T,
}

/// 最大流問題を解くグラフ
///
/// 辺ごとに容量と流量を持ち, Dinic法で`s`-`t`間の最大流を求める.
/// `flow`は現在の残余グラフから増分だけ流すので, 辺を追加しながら
/// 繰り返し呼ぶことができる.
pub struct MaxFlowGraph<T> {
    graph: Vec<Vec<InnerEdge<T>>>,
    pos: Vec<(usize, usize)>,
}

impl<T: Capacity> MaxFlowGraph<T> {
    /// `n`頂点0辺のグラフを作る.
    ///
    /// # Time complexity
    ///
    /// - *O*(*n*)
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            graph: vec![vec![]; n],
            pos: vec![],
        }
    }

    /// 頂点数を返す
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.graph.len()
    }

    /// グラフが0頂点か判定する
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// `from`から`to`へ容量`cap`, 流量0の辺を追加し, その辺の番号を返す.
    ///
    /// 返った番号は辺を追加しても変わらず, `get_edge`で状態を取り出せる.
    ///
    /// # Constraints
    ///
    /// - `from < self.len()`
    /// - `to < self.len()`
    /// - `T::zero() <= cap`
    ///
    /// # Time complexity
    ///
    /// - ならし *O*(1)
    pub fn add_edge(&mut self, from: usize, to: usize, cap: T) -> usize {
        debug_assert!(from < self.len());
        debug_assert!(to < self.len());
        debug_assert!(T::zero() <= cap);
        let m = self.pos.len();
        let from_id = self.graph[from].len();
        let mut to_id = self.graph[to].len();
        if from == to {
            to_id += 1;
        }
        self.pos.push((from, from_id));
        self.graph[from].push(InnerEdge {
            to,
            rev: to_id,
            cap,
        });
        self.graph[to].push(InnerEdge {
            to: from,
            rev: from_id,
            cap: T::zero(),
        });
        m
    }

    /// `add_edge`の検査付き版. 引数が不正なら状態を変えずにエラーを返す.
    pub fn try_add_edge(&mut self, from: usize, to: usize, cap: T) -> Result<usize> {
        for index in [from, to] {
            if index >= self.len() {
                return Err(Error::OutOfRange {
                    index,
                    len: self.len(),
                });
            }
        }
        if cap < T::zero() {
            return Err(Error::InvalidArgument("capacity must not be negative"));
        }
        Ok(self.add_edge(from, to, cap))
    }

    /// `i`番目に追加した辺の現在の状態を返す.
    ///
    /// # Constraints
    ///
    /// - `i`は追加済みの辺の番号
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn get_edge(&self, i: usize) -> Edge<T> {
        debug_assert!(i < self.pos.len());
        let (from, id) = self.pos[i];
        let e = self.graph[from][id];
        let re = self.graph[e.to][e.rev];
        Edge {
            from,
            to: e.to,
            cap: e.cap + re.cap,
            flow: re.cap,
        }
    }

    /// 全ての辺の現在の状態を追加順に返す.
    ///
    /// # Time complexity
    ///
    /// - 辺数を *M* として *O*(*M*)
    #[must_use]
    pub fn edges(&self) -> Vec<Edge<T>> {
        (0..self.pos.len()).map(|i| self.get_edge(i)).collect()
    }

    /// `i`番目に追加した辺の容量と流量を変更する. 他の辺は変化しない.
    ///
    /// # Constraints
    ///
    /// - `i`は追加済みの辺の番号
    /// - `T::zero() <= new_flow <= new_cap`
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    pub fn change_edge(&mut self, i: usize, new_cap: T, new_flow: T) {
        debug_assert!(i < self.pos.len());
        debug_assert!(T::zero() <= new_flow && new_flow <= new_cap);
        let (from, id) = self.pos[i];
        let (to, rev) = {
            let e = &self.graph[from][id];
            (e.to, e.rev)
        };
        self.graph[from][id].cap = new_cap - new_flow;
        self.graph[to][rev].cap = new_flow;
    }

    /// `s`から`t`へ流せるだけ流し, 流せた量を返す.
    ///
    /// # Constraints
    ///
    /// - `s < self.len()`
    /// - `t < self.len()`
    /// - `s != t`
    /// - 答えが`T`に収まる
    ///
    /// # Time complexity
    ///
    /// - 辺数を *M* として *O*(*N*² *M*)
    pub fn flow(&mut self, s: usize, t: usize) -> T {
        self.flow_limit(s, t, T::max_value())
    }

    /// `s`から`t`へ流量の合計が`limit`に達するまで流せるだけ流し, 流せた量を返す.
    ///
    /// # Constraints
    ///
    /// - `s < self.len()`
    /// - `t < self.len()`
    /// - `s != t`
    ///
    /// # Time complexity
    ///
    /// - 辺数を *M* として *O*(*N*² *M*)
    pub fn flow_limit(&mut self, s: usize, t: usize, limit: T) -> T {
        debug_assert!(s < self.len());
        debug_assert!(t < self.len());
        debug_assert!(s != t);
        let n = self.len();
        let mut level = vec![-1i64; n].into_boxed_slice();
        let mut iter = vec![0; n].into_boxed_slice();
        let mut que = std::collections::VecDeque::new();

        let mut flow = T::zero();
        while flow < limit {
            // 残余グラフ上のBFSでsからの距離を付ける
            level.fill(-1);
            level[s] = 0;
            que.clear();
            que.push_back(s);
            while let Some(v) = que.pop_front() {
                for e in &self.graph[v] {
                    if e.cap == T::zero() || level[e.to] >= 0 {
                        continue;
                    }
                    level[e.to] = level[v] + 1;
                    que.push_back(e.to);
                }
            }
            if level[t] < 0 {
                break;
            }
            iter.fill(0);
            let f = Self::dfs(&mut self.graph, &mut level, &mut iter, s, t, limit - flow);
            if f == T::zero() {
                break;
            }
            flow = flow + f;
        }
        flow
    }

    /// `flow_limit`の検査付き版. 引数が不正なら状態を変えずにエラーを返す.
    pub fn try_flow_limit(&mut self, s: usize, t: usize, limit: T) -> Result<T> {
        for index in [s, t] {
            if index >= self.len() {
                return Err(Error::OutOfRange {
                    index,
                    len: self.len(),
                });
            }
        }
        if s == t {
            return Err(Error::InvalidArgument("source and sink must differ"));
        }
        Ok(self.flow_limit(s, t, limit))
    }

    /// `flow`の検査付き版
    pub fn try_flow(&mut self, s: usize, t: usize) -> Result<T> {
        self.try_flow_limit(s, t, T::max_value())
    }

    /// レベルの増える向きの辺だけを使って流せるだけ流す (ブロッキングフロー)
    fn dfs(
        graph: &mut [Vec<InnerEdge<T>>],
        level: &mut [i64],
        iter: &mut [usize],
        v: usize,
        t: usize,
        up: T,
    ) -> T {
        if v == t {
            return up;
        }
        let mut res = T::zero();
        while iter[v] < graph[v].len() {
            let InnerEdge { to, rev, cap } = graph[v][iter[v]];
            if cap > T::zero() && level[v] + 1 == level[to] {
                let up2 = (up - res).min(cap);
                let d = Self::dfs(graph, level, iter, to, t, up2);
                if d > T::zero() {
                    graph[v][iter[v]].cap = graph[v][iter[v]].cap - d;
                    graph[to][rev].cap = graph[to][rev].cap + d;
                    res = res + d;
                    if res == up {
                        return res;
                    }
                    continue;
                }
            }
            iter[v] += 1;
        }
        // この相ではvから先に進めない
        level[v] = -1;
        res
    }

    /// 残余グラフで`s`から到達できる頂点の集合を返す.
    ///
    /// `flow(s, t)`を1度だけ呼んだ直後なら, 返り値は`s`-`t`間の最小カットに対応する.
    ///
    /// # Constraints
    ///
    /// - `s < self.len()`
    ///
    /// # Time complexity
    ///
    /// - 辺数を *M* として *O*(*N* + *M*)
    #[must_use]
    pub fn min_cut(&self, s: usize) -> Box<[bool]> {
        debug_assert!(s < self.len());
        let mut visited = vec![false; self.len()].into_boxed_slice();
        let mut que = std::collections::VecDeque::new();
        visited[s] = true;
        que.push_back(s);
        while let Some(v) = que.pop_front() {
            for e in &self.graph[v] {
                if e.cap > T::zero() && !visited[e.to] {
                    visited[e.to] = true;
                    que.push_back(e.to);
                }
            }
        }
        visited
    }
}
