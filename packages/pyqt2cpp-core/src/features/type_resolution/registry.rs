//! Qt wrapper class registry
//!
//! A type expression whose terminal name appears here translates to that
//! bare class name, so `QtCore.QObject` and `QObject` both come out as
//! `QObject`. The bundled table is the Qt 4 core and widget surface;
//! callers with other bindings construct the set themselves.

use std::collections::HashSet;

/// Qt wrapper class names bundled with the crate
pub const QT_CLASS_NAMES: &[&str] = &[
    // QtCore
    "QAbstractAnimation",
    "QAbstractItemModel",
    "QAbstractListModel",
    "QAbstractTableModel",
    "QBasicTimer",
    "QBitArray",
    "QBuffer",
    "QByteArray",
    "QChildEvent",
    "QCoreApplication",
    "QDataStream",
    "QDate",
    "QDateTime",
    "QDir",
    "QEasingCurve",
    "QEvent",
    "QEventLoop",
    "QFile",
    "QFileInfo",
    "QFileSystemWatcher",
    "QIODevice",
    "QLibrary",
    "QLibraryInfo",
    "QLine",
    "QLineF",
    "QLocale",
    "QMargins",
    "QMetaEnum",
    "QMetaMethod",
    "QMetaObject",
    "QMetaProperty",
    "QMimeData",
    "QModelIndex",
    "QMutex",
    "QObject",
    "QParallelAnimationGroup",
    "QPersistentModelIndex",
    "QPoint",
    "QPointF",
    "QProcess",
    "QPropertyAnimation",
    "QRect",
    "QRectF",
    "QRegExp",
    "QRunnable",
    "QSemaphore",
    "QSequentialAnimationGroup",
    "QSettings",
    "QSharedMemory",
    "QSignalMapper",
    "QSize",
    "QSizeF",
    "QSocketNotifier",
    "QState",
    "QStateMachine",
    "QString",
    "QStringList",
    "QSystemSemaphore",
    "QTemporaryFile",
    "QTextCodec",
    "QTextStream",
    "QThread",
    "QThreadPool",
    "QTime",
    "QTimeLine",
    "QTimer",
    "QTimerEvent",
    "QTranslator",
    "QUrl",
    "QUuid",
    "QVariant",
    "QWaitCondition",
    "QXmlStreamReader",
    "QXmlStreamWriter",
    // QtGui
    "QAction",
    "QActionGroup",
    "QApplication",
    "QBitmap",
    "QBoxLayout",
    "QBrush",
    "QCalendarWidget",
    "QCheckBox",
    "QClipboard",
    "QCloseEvent",
    "QColor",
    "QColorDialog",
    "QComboBox",
    "QCompleter",
    "QContextMenuEvent",
    "QCursor",
    "QDateEdit",
    "QDateTimeEdit",
    "QDesktopWidget",
    "QDial",
    "QDialog",
    "QDockWidget",
    "QDoubleSpinBox",
    "QDoubleValidator",
    "QDrag",
    "QDragEnterEvent",
    "QDragMoveEvent",
    "QDropEvent",
    "QFileDialog",
    "QFocusEvent",
    "QFont",
    "QFontComboBox",
    "QFontDialog",
    "QFontMetrics",
    "QFormLayout",
    "QFrame",
    "QGraphicsEllipseItem",
    "QGraphicsItem",
    "QGraphicsPixmapItem",
    "QGraphicsProxyWidget",
    "QGraphicsRectItem",
    "QGraphicsScene",
    "QGraphicsTextItem",
    "QGraphicsView",
    "QGridLayout",
    "QGroupBox",
    "QHBoxLayout",
    "QHeaderView",
    "QHideEvent",
    "QIcon",
    "QImage",
    "QInputDialog",
    "QIntValidator",
    "QItemDelegate",
    "QItemSelectionModel",
    "QKeyEvent",
    "QKeySequence",
    "QLCDNumber",
    "QLabel",
    "QLayout",
    "QLineEdit",
    "QListView",
    "QListWidget",
    "QListWidgetItem",
    "QMainWindow",
    "QMdiArea",
    "QMdiSubWindow",
    "QMenu",
    "QMenuBar",
    "QMessageBox",
    "QMouseEvent",
    "QMoveEvent",
    "QPaintEvent",
    "QPainter",
    "QPainterPath",
    "QPalette",
    "QPen",
    "QPixmap",
    "QPlainTextEdit",
    "QPolygon",
    "QPolygonF",
    "QProgressBar",
    "QProgressDialog",
    "QPushButton",
    "QRadioButton",
    "QRegExpValidator",
    "QRegion",
    "QResizeEvent",
    "QScrollArea",
    "QScrollBar",
    "QShortcut",
    "QShowEvent",
    "QSizePolicy",
    "QSlider",
    "QSortFilterProxyModel",
    "QSpacerItem",
    "QSpinBox",
    "QSplashScreen",
    "QSplitter",
    "QStackedLayout",
    "QStackedWidget",
    "QStandardItem",
    "QStandardItemModel",
    "QStatusBar",
    "QStyledItemDelegate",
    "QSyntaxHighlighter",
    "QSystemTrayIcon",
    "QTabBar",
    "QTabWidget",
    "QTableView",
    "QTableWidget",
    "QTableWidgetItem",
    "QTextBlock",
    "QTextCharFormat",
    "QTextCursor",
    "QTextDocument",
    "QTextEdit",
    "QTextOption",
    "QTimeEdit",
    "QToolBar",
    "QToolButton",
    "QToolTip",
    "QTransform",
    "QTreeView",
    "QTreeWidget",
    "QTreeWidgetItem",
    "QVBoxLayout",
    "QValidator",
    "QWheelEvent",
    "QWidget",
    "QWizard",
    "QWizardPage",
];

/// Membership set consulted when classifying type expressions
///
/// Built once before translation starts and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct QtTypeRegistry {
    names: HashSet<String>,
}

impl QtTypeRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self {
            names: HashSet::new(),
        }
    }

    /// Registry seeded with the bundled Qt class names
    pub fn with_qt_classes() -> Self {
        Self {
            names: QT_CLASS_NAMES.iter().map(|name| name.to_string()).collect(),
        }
    }

    /// Add a class name
    pub fn register(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    /// Membership test
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
