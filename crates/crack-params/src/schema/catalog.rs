//! 内置参数声明表。
//!
//! 每个命名空间一张表，表内顺序即渲染顺序；修改顺序或删除字段属于破坏性变更。

use super::{NamespaceSpec, macros::namespace_section};
use crate::verbosity::Verbosity;

namespace_section! {
    /// 裂纹几何、晶体结构与加载方式。
    pub struct CrackSection for Crack {
        /// 晶体结构名称，例如 `diamond`、`graphene`。
        structure: Text = "diamond",
        element: Text = "Si",
        /// 晶格常数初始猜测值（Å），弛豫前使用。
        lattice_guess: Float = 5.44,
        lattice_a: Float = 5.44,
        lattice_c: Float = 0.0,
        lattice_u: Float = 0.0,
        lattice_x: Float = 0.0,
        lattice_y: Float = 0.0,
        lattice_z: Float = 0.0,
        /// 裂纹面与扩展方向的米勒指数描述。
        name: Text = "(111)[11b0]",
        width: Float = 200.0,
        height: Float = 100.0,
        num_layers: Integer = 1,
        apply_initial_load: Boolean = true,
        strain: Float = 0.01,
        /// 能量释放率（J/m²）。
        g as "G": Float = 1.0,
        /// 加载方式：`uniform`、`ramp`、`kfield`、`interp_kfield_uniform`、`reduce_uniform`。
        loading: Text = "uniform",
        load_interp_length: Float = 100.0,
        ramp_length: Float = 100.0,
        ramp_start_length: Float = 200.0,
        ramp_end_g as "ramp_end_G": Float = 1.0,
        strain_increment: Float = 0.005,
        g_increment as "G_increment": Float = 0.0,
        seed_length: Float = 50.0,
        strain_zone_width: Float = 0.0,
        vacuum_size: Float = 100.0,
        rescale_x_z: Boolean = false,
        rescale_x: Boolean = false,
        edge_fix_tol: Float = 2.7,
        y_shift: Float = 0.0,
        x_shift: Float = 0.0,
        align_y: Boolean = true,
        seed_embed_tol: Float = 3.0,
        graphene_theta: Float = 0.0,
        graphene_notch_width: Float = 5.0,
        graphene_notch_height: Float = 5.0,
        slab_filename: Text = "",
        bulk_filename: Text = "",
        relax_loading_field: Boolean = true,
        dislo_seed: Integer = 0,
        check_surface_coordination: Boolean = false,
        check_coordination_atom_type: Integer = 18,
        check_coordination_critical_nneigh: Integer = 2,
        check_coordination_region: Float = 10.0,
        double_ended: Boolean = false,
        tip_grid_size: Float = 3.0,
        tip_min_separation: Float = 20.0,
        /// 裂尖定位方法：`coordination`、`percolation`、`local_energy`。
        tip_method: Text = "coordination",
        free_surfaces: Boolean = false,
        front_window_size: Float = 5.0,
        fix_sides: Boolean = false,
        fix_dipoles: Boolean = false,
        fix_dipoles_tol: Float = 5.0,
        curved_front: Boolean = false,
        curvature: Float = -0.001,
        front_alpha: Float = 100.0,
        front_angle_threshold: Float = 100.0,
        thermostat_ramp_length: Float = 50.0,
        thermostat_ramp_max_tau: Float = 10000.0,
        initial_velocity_field: Boolean = false,
        initial_velocity_field_dx: Float = 5.0,
        initial_velocity_field_dt: Float = 100.0,
        periodic_x: Boolean = false,
    }
}

namespace_section! {
    /// 任务类型与随机种子。
    pub struct SimulationSection for Simulation {
        /// `md`、`minim`、`force_integration`、`quasi_static` 之一。
        task: Text = "md",
        seed: Integer = 0,
        /// 为真时跳过 QM 计算，仅以经典势运行。
        classical: Boolean = false,
        force_initial_load_step: Boolean = false,
        initial_state: Text = "",
    }
}

namespace_section! {
    /// 分子动力学步长、热浴与平滑加载控制。
    pub struct MdSection for Md {
        /// 积分步长（fs）。
        time_step: Float = 1.0,
        extrapolate_steps: Integer = 10,
        crust: Float = 2.0,
        recalc_connect_factor: Float = 0.8,
        nneigh_tol: Float = 1.3,
        sim_temp: Float = 300.0,
        avg_time: Float = 50.0,
        thermalise_tau: Float = 50.0,
        thermalise_wait_time: Float = 400.0,
        thermalise_wait_factor: Float = 2.0,
        tau: Float = 500.0,
        per_atom_tau: Boolean = false,
        wait_time: Float = 500.0,
        interval_time: Float = 100.0,
        calc_connect_interval: Float = 10.0,
        smooth_loading_rate: Float = 0.0,
        smooth_loading_tip_move_tol: Float = 3.0,
        smooth_loading_arrest_time: Float = 400.0,
        smooth_loading_tip_edge_tol: Float = 50.0,
        damping_time: Float = 100.0,
        /// 系综：`NVE`、`NVT`。
        ensemble: Text = "NVT",
        max_runs: Integer = 1,
        crack_tip_averaging_time: Float = 100.0,
    }
}

namespace_section! {
    /// 能量最小化，分别控制整体与经典子系统。
    pub struct MinimSection for Minim {
        method: Text = "cg",
        tol: Float = 1e-3,
        eps_guess: Float = 0.01,
        max_steps: Integer = 1000,
        print_output: Integer = 10,
        linminroutine: Text = "LINMIN_DERIV",
        fire_dt0: Float = 1.0,
        fire_dt_max: Float = 10.0,
        minimise_mm: Boolean = false,
        mm_method: Text = "cg",
        mm_tol: Float = 1e-6,
        mm_eps_guess: Float = 0.001,
        mm_max_steps: Integer = 1000,
        mm_linminroutine: Text = "FAST_LINMIN",
        mm_args_str: Text = "",
    }
}

namespace_section! {
    /// 日志详尽程度、快照打印与检查点。
    pub struct IoSection for Io {
        /// 符号名：`ERROR`、`SILENT`、`NORMAL`、`VERBOSE`、`NERD`、`ANAL`。
        verbosity: Verbosity = Verbosity::Normal,
        netcdf: Boolean = false,
        print_interval: Float = 10.0,
        print_all_properties: Boolean = false,
        /// 快照中输出的逐原子属性，首项恒为 `species`。
        print_properties: PropertyList = &[
            "species",
            "pos",
            "hybrid_mark",
            "changed_nn",
            "move_mask",
            "nn",
            "old_nn",
            "edge_mask",
            "md_old_changed_nn",
            "load",
            "avg_ke",
        ],
        checkpoint_interval: Float = 100.0,
        checkpoint_path: Text = "",
        mpi_print_all: Boolean = false,
        backup: Boolean = false,
        timing: Boolean = false,
    }
}

namespace_section! {
    /// QM 区域选择。
    pub struct SelectionSection for Selection {
        max_qm_atoms: Integer = 200,
        /// `static`、`coordination`、`crack_front`、`ellipse`。
        method: Text = "coordination",
        /// 椭圆半轴 `(a, b, c)`（Å）。
        ellipse: Vector3 = [8.0, 5.0, 10.0],
        ellipse_bias: Float = 0.5,
        ellipse_buffer: Float = 1.3,
        cutoff_plane: Float = 10.0,
        fit_cutoff_plane: Float = 12.0,
        directionality: Boolean = true,
        edge_tol: Float = 10.0,
        update_interval: Float = 10.0,
    }
}

namespace_section! {
    /// 经典势参数。
    pub struct ClassicalSection for Classical {
        args: Text = "IP SW",
        args_str: Text = "",
        force_reweight: Float = 1.0,
    }
}

namespace_section! {
    /// QM 势参数、团簇切割与滞后缓冲区。
    pub struct QmSection for Qm {
        args: Text = "FilePot command=./castep_driver.sh property_list=species:pos:hybrid_mark",
        args_str: Text = "",
        extra_args_str: Text = "",
        cp2k: Boolean = false,
        clusters: Boolean = true,
        little_clusters: Boolean = false,
        buffer_hops: Integer = 3,
        transition_hops: Integer = 0,
        terminate: Boolean = true,
        force_periodic: Boolean = false,
        randomise_buffer: Boolean = true,
        even_electrons: Boolean = false,
        vacuum_size: Float = 3.0,
        calc_force_error: Boolean = false,
        rescale_r: Boolean = false,
        hysteretic_buffer: Boolean = false,
        hysteretic_buffer_inner_radius: Float = 5.0,
        hysteretic_buffer_outer_radius: Float = 7.0,
        hysteretic_connect: Boolean = false,
        hysteretic_connect_inner_factor: Float = 1.2,
        hysteretic_connect_outer_factor: Float = 1.5,
        hysteretic_connect_cluster_radius: Float = 10.0,
    }
}

namespace_section! {
    pub struct FitSection for Fit {
        hops: Integer = 3,
        method: Text = "adj_pot_svd",
    }
}

namespace_section! {
    pub struct ForceIntegrationSection for ForceIntegration {
        end_file: Text = "",
        n_steps: Integer = 10,
    }
}

namespace_section! {
    pub struct QuasiStaticSection for QuasiStatic {
        tip_move_tol: Float = 5.0,
    }
}

namespace_section! {
    /// 诊断用开关，生产运行保持关闭。
    pub struct HackSection for Hack {
        qm_zero_z_force: Boolean = false,
        fit_on_eqm_coordination_only: Boolean = false,
    }
}

/// 声明顺序下的内置命名空间表。
pub(super) fn standard_namespaces() -> Vec<NamespaceSpec> {
    vec![
        NamespaceSpec::new(CrackSection::NAMESPACE, CrackSection::FIELDS),
        NamespaceSpec::new(SimulationSection::NAMESPACE, SimulationSection::FIELDS),
        NamespaceSpec::new(MdSection::NAMESPACE, MdSection::FIELDS),
        NamespaceSpec::new(MinimSection::NAMESPACE, MinimSection::FIELDS),
        NamespaceSpec::new(IoSection::NAMESPACE, IoSection::FIELDS),
        NamespaceSpec::new(SelectionSection::NAMESPACE, SelectionSection::FIELDS),
        NamespaceSpec::new(ClassicalSection::NAMESPACE, ClassicalSection::FIELDS),
        NamespaceSpec::new(QmSection::NAMESPACE, QmSection::FIELDS),
        NamespaceSpec::new(FitSection::NAMESPACE, FitSection::FIELDS),
        NamespaceSpec::new(
            ForceIntegrationSection::NAMESPACE,
            ForceIntegrationSection::FIELDS,
        ),
        NamespaceSpec::new(QuasiStaticSection::NAMESPACE, QuasiStaticSection::FIELDS),
        NamespaceSpec::new(HackSection::NAMESPACE, HackSection::FIELDS),
    ]
}
